//! In-memory store used for local development (`DATABASE_URL=memory://`)
//! and for tests that should not need a running PostgreSQL.
//!
//! Mirrors the repository semantics: insertion-ordered listing, unique
//! category names, populated task reads. Every write holds the lock for
//! its whole read-check-write so each operation is atomic.

use kanban_core::category::duplicate_name;
use kanban_core::error::CoreError;
use kanban_core::task::TaskStatus;
use kanban_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::category::Category;
use crate::models::task::{CategorySummary, Task, TaskCategory};

/// A stored task. The category is kept as a bare reference.
#[derive(Debug, Clone)]
struct TaskEntry {
    id: DbId,
    title: String,
    category_id: DbId,
    status: TaskStatus,
    created_at: kanban_core::types::Timestamp,
}

#[derive(Debug, Default)]
struct Collections {
    categories: Vec<Category>,
    tasks: Vec<TaskEntry>,
    next_category_id: DbId,
    next_task_id: DbId,
}

impl Collections {
    fn category(&self, id: DbId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    fn to_task(&self, entry: &TaskEntry, populate_category: bool) -> Result<Task, CoreError> {
        let category = if populate_category {
            let category = self.category(entry.category_id).ok_or_else(|| {
                CoreError::Internal(format!(
                    "task {} references missing category {}",
                    entry.id, entry.category_id
                ))
            })?;
            TaskCategory::Populated(CategorySummary::from(category))
        } else {
            TaskCategory::Id(entry.category_id)
        };
        Ok(Task {
            id: entry.id,
            title: entry.title.clone(),
            category,
            status: entry.status,
            created_at: entry.created_at,
        })
    }
}

/// Process-local category and task collections.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- categories ----

    pub async fn list_categories(&self) -> Vec<Category> {
        self.inner.read().await.categories.clone()
    }

    pub async fn find_category(&self, id: DbId) -> Option<Category> {
        self.inner.read().await.category(id).cloned()
    }

    /// Insert a category. `name` must already be validated and trimmed.
    pub async fn create_category(&self, name: &str) -> Result<Category, CoreError> {
        let mut inner = self.inner.write().await;
        if inner.categories.iter().any(|c| c.name == name) {
            return Err(duplicate_name(name));
        }
        inner.next_category_id += 1;
        let category = Category {
            id: inner.next_category_id,
            name: name.to_string(),
            created_at: chrono::Utc::now(),
        };
        inner.categories.push(category.clone());
        Ok(category)
    }

    // ---- tasks ----

    pub async fn list_tasks(&self, populate_category: bool) -> Result<Vec<Task>, CoreError> {
        let inner = self.inner.read().await;
        inner
            .tasks
            .iter()
            .map(|entry| inner.to_task(entry, populate_category))
            .collect()
    }

    pub async fn find_task(&self, id: DbId) -> Result<Option<Task>, CoreError> {
        let inner = self.inner.read().await;
        inner
            .tasks
            .iter()
            .find(|t| t.id == id)
            .map(|entry| inner.to_task(entry, true))
            .transpose()
    }

    /// Insert a task. `title` must already be validated and trimmed.
    pub async fn create_task(
        &self,
        title: &str,
        category_id: DbId,
        status: TaskStatus,
    ) -> Result<Task, CoreError> {
        let mut inner = self.inner.write().await;
        if inner.category(category_id).is_none() {
            return Err(CoreError::NotFound {
                entity: "Category",
                id: category_id,
            });
        }
        inner.next_task_id += 1;
        let entry = TaskEntry {
            id: inner.next_task_id,
            title: title.to_string(),
            category_id,
            status,
            created_at: chrono::Utc::now(),
        };
        let task = inner.to_task(&entry, true)?;
        inner.tasks.push(entry);
        Ok(task)
    }

    /// Returns `None` if no task has that ID.
    pub async fn update_task_status(
        &self,
        id: DbId,
        status: TaskStatus,
    ) -> Result<Option<Task>, CoreError> {
        let mut inner = self.inner.write().await;
        let Some(entry) = inner.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        entry.status = status;
        let entry = entry.clone();
        inner.to_task(&entry, true).map(Some)
    }

    /// Returns `true` if a task was removed.
    pub async fn delete_task(&self, id: DbId) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.tasks.len();
        inner.tasks.retain(|t| t.id != id);
        inner.tasks.len() < before
    }
}
