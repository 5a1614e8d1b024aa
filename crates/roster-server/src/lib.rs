//! HTTP server for the Roster student registry.
//!
//! Translates REST requests into [`StudentStore`](roster_store::StudentStore)
//! calls and store results into JSON responses.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use handler::AppState;
pub use server::RosterServer;
