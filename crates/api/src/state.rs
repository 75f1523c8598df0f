use std::sync::Arc;

use crate::config::ServerConfig;
use crate::view::PageRenderer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference counted and the rest sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: slimshop_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Turns page view models into response bodies.
    pub renderer: Arc<dyn PageRenderer>,
}
