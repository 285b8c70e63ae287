use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: medialog_db::DbPool,
    /// Server configuration (JWT secret and expiry, bind address, CORS).
    pub config: Arc<ServerConfig>,
}
