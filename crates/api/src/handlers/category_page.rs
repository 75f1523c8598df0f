//! Handlers for the product category page.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use slimshop_core::validation::validate_category_name;
use slimshop_db::repositories::ProductCategoryRepo;

use crate::error::AppResult;
use crate::state::AppState;
use crate::view::{PageViewModel, CATEGORY_PAGE_TEMPLATE};

/// Body of the category form. A missing field decodes as an empty string.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub ptype: String,
}

/// GET /dbslimdemo
pub async fn show(State(state): State<AppState>) -> AppResult<Response> {
    tracing::info!("Product category page requested");

    let mut conn = state.pool.acquire().await?;
    let categories = ProductCategoryRepo::list(&mut conn).await?;

    render(&state, &PageViewModel::listing(categories))
}

/// POST /dbslimdemo
///
/// Adds the submitted category if it is valid and re-renders the page.
/// Store failures propagate to [`AppError`](crate::error::AppError).
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<CategoryForm>,
) -> AppResult<Response> {
    let mut conn = state.pool.acquire().await?;

    let model = match validate_category_name(&form.ptype) {
        Ok(name) => {
            let id = ProductCategoryRepo::create(&mut conn, name.as_str()).await?;
            tracing::info!(id, name = %name, "Product category added");

            let status = format!("Product Category {name} added");
            let categories = ProductCategoryRepo::list(&mut conn).await?;
            PageViewModel::added(status, categories)
        }
        Err(errors) => {
            tracing::debug!(ptype = %form.ptype, ?errors, "Product category rejected");

            let categories = ProductCategoryRepo::list(&mut conn).await?;
            PageViewModel::rejected(form.ptype, errors, categories)
        }
    };

    render(&state, &model)
}

fn render(state: &AppState, model: &PageViewModel) -> AppResult<Response> {
    let body = state.renderer.render(CATEGORY_PAGE_TEMPLATE, model)?;
    Ok(([(CONTENT_TYPE, state.renderer.content_type())], body).into_response())
}
