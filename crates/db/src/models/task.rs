//! Task model.
//!
//! A task references its category by id. Reads can "populate" that
//! reference into the category's id and name so clients never need a
//! second round trip.

use kanban_core::error::CoreError;
use kanban_core::task::TaskStatus;
use kanban_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::category::Category;

/// The joined view of a task's category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: DbId,
    pub name: String,
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

/// A task's category field: either the bare reference or the populated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskCategory {
    Populated(CategorySummary),
    Id(DbId),
}

impl TaskCategory {
    pub fn id(&self) -> DbId {
        match self {
            Self::Populated(summary) => summary.id,
            Self::Id(id) => *id,
        }
    }

    /// Category name, available only when populated.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Populated(summary) => Some(&summary.name),
            Self::Id(_) => None,
        }
    }
}

/// A task as returned by the store and the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub category: TaskCategory,
    pub status: TaskStatus,
    pub created_at: Timestamp,
}

/// A task row, optionally joined with `categories.name`.
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: DbId,
    pub title: String,
    pub category_id: DbId,
    pub category_name: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

impl TryFrom<TaskRow> for Task {
    type Error = CoreError;

    /// Rows carrying a category name become populated tasks.
    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<TaskStatus>().map_err(|_| {
            CoreError::Internal(format!(
                "task {} has unrecognised stored status '{}'",
                row.id, row.status
            ))
        })?;
        let category = match row.category_name {
            Some(name) => TaskCategory::Populated(CategorySummary {
                id: row.category_id,
                name,
            }),
            None => TaskCategory::Id(row.category_id),
        };
        Ok(Self {
            id: row.id,
            title: row.title,
            category,
            status,
            created_at: row.created_at,
        })
    }
}

/// Body of `POST /tasks`. Missing fields deserialize as empty so that the
/// store can report them as validation failures.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateTask {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: Option<DbId>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of `PATCH /tasks` / `PUT /tasks`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateTaskStatus {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    pub status: Option<String>,
}
