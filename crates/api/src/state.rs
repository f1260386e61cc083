use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally and the
/// configuration sits behind an `Arc`. Handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: admitpath_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
