//! Category model.

use kanban_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new category. A missing `name` is treated as empty.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateCategory {
    #[serde(default)]
    pub name: String,
}
