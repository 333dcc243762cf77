//! Repository for the `tasks` table.
//!
//! Reads that populate the category join `categories` and select its name
//! as `category_name`; bare reads select `NULL` in its place so both shapes
//! map onto [`TaskRow`].

use kanban_core::task::TaskStatus;
use kanban_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::TaskRow;

/// Column list for joined task queries (`t` = tasks, `c` = categories).
const JOINED_COLUMNS: &str =
    "t.id, t.title, t.category_id, c.name AS category_name, t.status, t.created_at";

/// Column list for unjoined task queries.
const BARE_COLUMNS: &str =
    "t.id, t.title, t.category_id, NULL::TEXT AS category_name, t.status, t.created_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List all tasks in insertion order, optionally joined with their category.
    pub async fn list(pool: &PgPool, populate_category: bool) -> Result<Vec<TaskRow>, sqlx::Error> {
        let query = if populate_category {
            format!(
                "SELECT {JOINED_COLUMNS} FROM tasks t
                 JOIN categories c ON c.id = t.category_id
                 ORDER BY t.id ASC"
            )
        } else {
            format!("SELECT {BARE_COLUMNS} FROM tasks t ORDER BY t.id ASC")
        };
        sqlx::query_as::<_, TaskRow>(&query).fetch_all(pool).await
    }

    /// Find a task by ID with its category populated.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TaskRow>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM tasks t
             JOIN categories c ON c.id = t.category_id
             WHERE t.id = $1"
        );
        sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a task and return it with its category populated.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        category_id: DbId,
        status: TaskStatus,
    ) -> Result<TaskRow, sqlx::Error> {
        let query = format!(
            "WITH t AS (
                INSERT INTO tasks (title, category_id, status)
                VALUES ($1, $2, $3)
                RETURNING *
             )
             SELECT {JOINED_COLUMNS} FROM t
             JOIN categories c ON c.id = t.category_id"
        );
        sqlx::query_as::<_, TaskRow>(&query)
            .bind(title)
            .bind(category_id)
            .bind(status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Set a task's status, returning the updated task populated, or `None`
    /// if no task has that ID.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: TaskStatus,
    ) -> Result<Option<TaskRow>, sqlx::Error> {
        let query = format!(
            "WITH t AS (
                UPDATE tasks SET status = $2
                WHERE id = $1
                RETURNING *
             )
             SELECT {JOINED_COLUMNS} FROM t
             JOIN categories c ON c.id = t.category_id"
        );
        sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
