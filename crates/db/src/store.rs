//! The process-scoped store handle and the category/task store adapters.
//!
//! Adapters validate and normalise their inputs before touching the
//! backend, so both backends report the same [`CoreError`] variants:
//! `Validation` for missing or blank fields, `NotFound` for unknown ids,
//! `Conflict` for duplicate category names.

use std::sync::Arc;

use kanban_core::category::{duplicate_name, validate_category_name};
use kanban_core::error::CoreError;
use kanban_core::task::{validate_title, TaskStatus};
use kanban_core::types::DbId;

use crate::error::DbError;
use crate::memory::MemoryStore;
use crate::models::category::Category;
use crate::models::task::Task;
use crate::repositories::{CategoryRepo, TaskRepo};
use crate::DbPool;

/// URL scheme selecting the in-memory backend.
pub const MEMORY_URL_SCHEME: &str = "memory:";

/// Shared handle to the configured backend. Cheap to clone.
#[derive(Debug, Clone)]
pub enum Store {
    Postgres(DbPool),
    Memory(Arc<MemoryStore>),
}

impl Store {
    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Open the store named by `url`.
    ///
    /// `memory://` selects a fresh in-memory store; anything else is handed
    /// to the PostgreSQL pool, which is connected and migrated here.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, DbError> {
        if url.starts_with(MEMORY_URL_SCHEME) {
            tracing::info!("Using in-memory store");
            return Ok(Self::memory());
        }

        let pool = crate::create_pool(url, max_connections).await?;
        tracing::info!(max_connections, "Database connection pool created");

        crate::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self::Postgres(pool))
    }

    /// A fresh, empty in-memory store.
    pub fn memory() -> Self {
        Self::Memory(Arc::new(MemoryStore::new()))
    }

    /// Confirm the backend is reachable.
    pub async fn health_check(&self) -> Result<(), DbError> {
        match self {
            Self::Postgres(pool) => Ok(crate::health_check(pool).await?),
            Self::Memory(_) => Ok(()),
        }
    }

    /// Close all pooled connections. Further calls on a closed Postgres
    /// store fail with a database error.
    pub async fn close(&self) {
        if let Self::Postgres(pool) = self {
            pool.close().await;
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    // -----------------------------------------------------------------------
    // Category store adapter
    // -----------------------------------------------------------------------

    /// List all categories in insertion order.
    pub async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        match self {
            Self::Postgres(pool) => Ok(CategoryRepo::list(pool).await?),
            Self::Memory(mem) => Ok(mem.list_categories().await),
        }
    }

    pub async fn find_category(&self, id: DbId) -> Result<Option<Category>, DbError> {
        match self {
            Self::Postgres(pool) => Ok(CategoryRepo::find_by_id(pool, id).await?),
            Self::Memory(mem) => Ok(mem.find_category(id).await),
        }
    }

    /// Create a category with a trimmed, non-empty, unique name.
    pub async fn create_category(&self, name: &str) -> Result<Category, DbError> {
        let name = validate_category_name(name)?;
        match self {
            Self::Postgres(pool) => match CategoryRepo::create(pool, &name).await {
                Ok(category) => Ok(category),
                // Replace the constraint name with a readable message.
                Err(err) => match DbError::from(err) {
                    DbError::Core(CoreError::Conflict(_)) => Err(duplicate_name(&name).into()),
                    other => Err(other),
                },
            },
            Self::Memory(mem) => Ok(mem.create_category(&name).await?),
        }
    }

    // -----------------------------------------------------------------------
    // Task store adapter
    // -----------------------------------------------------------------------

    /// List all tasks in insertion order. With `populate_category` each
    /// task carries its category's id and name instead of the bare id.
    pub async fn list_tasks(&self, populate_category: bool) -> Result<Vec<Task>, DbError> {
        match self {
            Self::Postgres(pool) => TaskRepo::list(pool, populate_category)
                .await?
                .into_iter()
                .map(|row| Task::try_from(row).map_err(DbError::from))
                .collect(),
            Self::Memory(mem) => Ok(mem.list_tasks(populate_category).await?),
        }
    }

    /// Find a task by ID, populated.
    pub async fn find_task(&self, id: DbId) -> Result<Option<Task>, DbError> {
        match self {
            Self::Postgres(pool) => TaskRepo::find_by_id(pool, id)
                .await?
                .map(Task::try_from)
                .transpose()
                .map_err(DbError::from),
            Self::Memory(mem) => Ok(mem.find_task(id).await?),
        }
    }

    /// Create a task. The title is trimmed and must be non-empty, the
    /// category must exist, and the status defaults to `to-do`.
    pub async fn create_task(
        &self,
        title: &str,
        category_id: Option<DbId>,
        status: Option<TaskStatus>,
    ) -> Result<Task, DbError> {
        let title = validate_title(title)?;
        let category_id = category_id
            .ok_or_else(|| CoreError::Validation("category is required".to_string()))?;
        let status = status.unwrap_or_default();

        match self {
            Self::Postgres(pool) => {
                if CategoryRepo::find_by_id(pool, category_id).await?.is_none() {
                    return Err(CoreError::NotFound {
                        entity: "Category",
                        id: category_id,
                    }
                    .into());
                }
                // The category can vanish between the check and the insert.
                let row = TaskRepo::create(pool, &title, category_id, status)
                    .await
                    .map_err(|err| DbError::missing_reference(err, "Category", category_id))?;
                Ok(Task::try_from(row)?)
            }
            Self::Memory(mem) => Ok(mem.create_task(&title, category_id, status).await?),
        }
    }

    /// Move a task to any status. Unknown ids are `NotFound`.
    pub async fn update_task_status(&self, id: DbId, status: TaskStatus) -> Result<Task, DbError> {
        let updated = match self {
            Self::Postgres(pool) => TaskRepo::update_status(pool, id, status)
                .await?
                .map(Task::try_from)
                .transpose()?,
            Self::Memory(mem) => mem.update_task_status(id, status).await?,
        };
        updated.ok_or_else(|| CoreError::NotFound { entity: "Task", id }.into())
    }

    /// Permanently remove a task. Unknown ids are `NotFound`.
    pub async fn delete_task(&self, id: DbId) -> Result<(), DbError> {
        let deleted = match self {
            Self::Postgres(pool) => TaskRepo::delete(pool, id).await?,
            Self::Memory(mem) => mem.delete_task(id).await,
        };
        if !deleted {
            return Err(CoreError::NotFound { entity: "Task", id }.into());
        }
        Ok(())
    }
}
