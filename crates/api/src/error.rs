use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use slimshop_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// This is the request boundary: handlers propagate store and core failures
/// here with `?`, and [`IntoResponse`] logs them and produces a JSON error
/// response. Form validation failures never reach this type; they are
/// rendered inline on the page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `slimshop_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                internal_error()
            }
            // Store failures are never shown to the user in detail.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal_error()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
