//! Response bodies that are not plain domain records.

use kanban_core::types::DbId;
use serde::{Deserialize, Serialize};

/// Confirmation returned by `DELETE /tasks`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub message: String,
    pub id: DbId,
}
