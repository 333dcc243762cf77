//! Query parameter types for API handlers.

use kanban_core::types::DbId;
use serde::Deserialize;

/// `DELETE /tasks?id=<id>`. A missing id is reported by the handler as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct TaskIdParams {
    pub id: Option<DbId>,
}
