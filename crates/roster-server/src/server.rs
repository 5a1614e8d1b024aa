use std::sync::Arc;

use roster_store::{InMemoryStudentStore, StudentStore};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// Roster HTTP server.
pub struct RosterServer {
    config: ServerConfig,
    store: Arc<dyn StudentStore>,
}

impl RosterServer {
    /// Server backed by a fresh in-memory store, seeded if configured.
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.seed {
            InMemoryStudentStore::seeded()
        } else {
            InMemoryStudentStore::new()
        };
        Self::with_store(config, Arc::new(store))
    }

    pub fn with_store(config: ServerConfig, store: Arc<dyn StudentStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> Arc<dyn StudentStore> {
        Arc::clone(&self.store)
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(self.store()), &self.config)
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        self.config.validate()?;
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            mount = %self.config.mount_path,
            "Roster server listening on {}",
            self.config.bind_addr
        );
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
