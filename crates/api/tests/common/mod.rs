#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use slimshop_api::config::ServerConfig;
use slimshop_api::router::build_app_router;
use slimshop_api::state::AppState;
use slimshop_api::view::{HtmlRenderer, JsonRenderer, PageRenderer};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        db_max_connections: 5,
    }
}

fn build_app(pool: PgPool, renderer: Arc<dyn PageRenderer>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        renderer,
    };
    build_app_router(state, &config)
}

/// Full application router whose page renders the view model as JSON, so
/// tests can assert on individual fields.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(pool, Arc::new(JsonRenderer))
}

/// Full application router with the production HTML renderer.
pub fn build_html_test_app(pool: PgPool) -> Router {
    build_app(pool, Arc::new(HtmlRenderer))
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an already url-encoded form body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
