//! Category input validation.

use crate::error::CoreError;

/// Validate a category name, returning it trimmed of surrounding whitespace.
///
/// Uniqueness is enforced by the store, not here.
pub fn validate_category_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("name is required".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Error returned when a category name is already taken.
pub fn duplicate_name(name: &str) -> CoreError {
    CoreError::Conflict(format!("Category '{name}' already exists"))
}
