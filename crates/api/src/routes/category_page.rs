//! Route definitions for the product category page.

use axum::routing::get;
use axum::Router;

use crate::handlers::category_page;
use crate::state::AppState;

/// Path the page is served at.
pub const PAGE_PATH: &str = "/dbslimdemo";

/// ```text
/// GET    /dbslimdemo    -> show
/// POST   /dbslimdemo    -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        PAGE_PATH,
        get(category_page::show).post(category_page::submit),
    )
}
