//! `/health`: reports whether the category page can currently be served.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the page can be served, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// The pool handed out a connection and it answered.
    pub db_healthy: bool,
    /// The `product_category` table is readable.
    pub catalog_ready: bool,
}

impl HealthResponse {
    fn new(db_healthy: bool, catalog_ready: bool) -> Self {
        let status = if db_healthy && catalog_ready {
            "ok"
        } else {
            "degraded"
        };
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            catalog_ready,
        }
    }
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = slimshop_db::health_check(&state.pool).await.is_ok();
    let catalog_ready = match slimshop_db::schema_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Product category table is not readable");
            false
        }
    };

    Json(HealthResponse::new(db_healthy, catalog_ready))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_only_when_both_checks_pass() {
        assert_eq!(HealthResponse::new(true, true).status, "ok");
        assert_eq!(HealthResponse::new(true, false).status, "degraded");
        assert_eq!(HealthResponse::new(false, false).status, "degraded");
    }
}
