use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Sessions and records share it; conflicting
    /// writes are serialized by PostgreSQL, not in-process.
    pub pool: thoughts_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
