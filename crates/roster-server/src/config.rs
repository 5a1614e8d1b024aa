use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server settings, loadable from a TOML file. Missing keys take defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Path prefix the student routes are mounted under.
    pub mount_path: String,
    /// Start from the built-in seed collection instead of an empty one.
    pub seed: bool,
    /// Answer CORS preflights and allow any origin.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            mount_path: "/api/students".into(),
            seed: true,
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> ServerResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> ServerResult<String> {
        toml::to_string(self).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn validate(&self) -> ServerResult<()> {
        if !self.mount_path.starts_with('/') {
            return Err(ServerError::Config(format!(
                "mount_path must start with '/': {:?}",
                self.mount_path
            )));
        }
        if self.mount_path.len() > 1 && self.mount_path.ends_with('/') {
            return Err(ServerError::Config(format!(
                "mount_path must not end with '/': {:?}",
                self.mount_path
            )));
        }
        Ok(())
    }
}
