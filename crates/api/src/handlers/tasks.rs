//! Handlers for the task collection.
//!
//! Every task in a response has its category populated. Status strings are
//! parsed here so unknown values surface as 400 validation errors.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kanban_core::error::CoreError;
use kanban_core::task::TaskStatus;
use kanban_db::models::task::{CreateTask, UpdateTaskStatus};

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::TaskIdParams;
use crate::response::DeletedResponse;
use crate::state::AppState;

/// GET /api/tasks
///
/// List all tasks with their categories populated.
pub async fn list_tasks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tasks = state.store.list_tasks(true).await?;

    Ok(Json(tasks))
}

/// POST /api/tasks
///
/// Create a task from `{title, category, status?}`. The status defaults to
/// `to-do`; the category must exist.
pub async fn create_task(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTask>,
) -> AppResult<impl IntoResponse> {
    let status = input
        .status
        .as_deref()
        .map(str::parse::<TaskStatus>)
        .transpose()?;

    let task = state
        .store
        .create_task(&input.title, input.category, status)
        .await?;

    tracing::info!(
        task_id = task.id,
        category_id = task.category.id(),
        status = %task.status,
        "Task created",
    );

    Ok((StatusCode::CREATED, Json(task)))
}

/// PATCH /api/tasks, PUT /api/tasks
///
/// Move a task to another status from `{id, status}`.
pub async fn update_task_status(
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateTaskStatus>,
) -> AppResult<impl IntoResponse> {
    let id = input
        .id
        .ok_or_else(|| CoreError::Validation("id is required".to_string()))?;
    let status: TaskStatus = input
        .status
        .as_deref()
        .ok_or_else(|| CoreError::Validation("status is required".to_string()))?
        .parse()?;

    let task = state.store.update_task_status(id, status).await?;

    tracing::info!(task_id = id, status = %status, "Task status updated");

    Ok(Json(task))
}

/// DELETE /api/tasks?id=<id>
///
/// Permanently delete a task.
pub async fn delete_task(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<TaskIdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params
        .id
        .ok_or_else(|| CoreError::Validation("id query parameter is required".to_string()))?;

    state.store.delete_task(id).await?;

    tracing::info!(task_id = id, "Task deleted");

    Ok(Json(DeletedResponse {
        message: "Task deleted".to_string(),
        id,
    }))
}
