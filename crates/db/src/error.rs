use kanban_core::error::CoreError;
use kanban_core::types::DbId;

/// PostgreSQL error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL error code for foreign key violations.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Errors surfaced by the store adapters.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A domain-level failure: validation, not-found, or duplicate.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The database was unreachable or the query failed.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for DbError {
    /// Unique violations on `uq_` constraints become [`CoreError::Conflict`];
    /// everything else stays a database error.
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return DbError::Core(CoreError::Conflict(format!(
                        "Duplicate value violates unique constraint: {constraint}"
                    )));
                }
            }
        }
        DbError::Database(err)
    }
}

impl DbError {
    /// Convert an insert failure, reporting a foreign key violation as the
    /// referenced `entity` being missing.
    pub fn missing_reference(err: sqlx::Error, entity: &'static str, id: DbId) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
                return DbError::Core(CoreError::NotFound { entity, id });
            }
        }
        DbError::from(err)
    }
}
