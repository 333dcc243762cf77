//! Route definitions for tasks.

use axum::routing::get;
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Task routes mounted at `/tasks`.
///
/// ```text
/// GET    /          -> list_tasks
/// POST   /          -> create_task
/// PATCH  /          -> update_task_status
/// PUT    /          -> update_task_status
/// DELETE /?id=<id>  -> delete_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(tasks::list_tasks)
            .post(tasks::create_task)
            .patch(tasks::update_task_status)
            .put(tasks::update_task_status)
            .delete(tasks::delete_task),
    )
}
