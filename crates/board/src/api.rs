//! The REST operations the board depends on.

use async_trait::async_trait;
use kanban_core::task::TaskStatus;
use kanban_core::types::DbId;
use kanban_db::models::category::Category;
use kanban_db::models::task::{CreateTask, Task};

use crate::error::ClientResult;

/// Remote category and task operations. Tasks come back populated.
#[async_trait]
pub trait BoardApi: Send + Sync {
    async fn list_categories(&self) -> ClientResult<Vec<Category>>;

    async fn create_category(&self, name: &str) -> ClientResult<Category>;

    async fn list_tasks(&self) -> ClientResult<Vec<Task>>;

    async fn create_task(&self, input: &CreateTask) -> ClientResult<Task>;

    async fn update_task_status(&self, id: DbId, status: TaskStatus) -> ClientResult<Task>;

    async fn delete_task(&self, id: DbId) -> ClientResult<()>;
}
