//! Handlers for the category collection.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kanban_db::models::category::CreateCategory;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /api/categories
///
/// List all categories in insertion order.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.store.list_categories().await?;

    Ok(Json(categories))
}

/// POST /api/categories
///
/// Create a category. Names are trimmed and must be unique.
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = state.store.create_category(&input.name).await?;

    tracing::info!(
        category_id = category.id,
        name = %category.name,
        "Category created",
    );

    Ok((StatusCode::CREATED, Json(category)))
}
