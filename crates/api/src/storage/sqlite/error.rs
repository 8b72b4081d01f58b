//! SQLite error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `todo_core::storage`.
//! Constraint violations are mapped to semantic variants (e.g. UNIQUE to
//! AlreadyExists).

use sqlx::error::ErrorKind;
use todo_core::storage::RepositoryError;

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - UNIQUE / PRIMARY KEY constraint → `RepositoryError::AlreadyExists`
/// - NOT NULL / CHECK / FOREIGN KEY constraint → `RepositoryError::InvalidData`
/// - Pool and I/O errors → `RepositoryError::ConnectionFailed`
/// - `RowNotFound` → `RepositoryError::NotFound`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error, entity_type: &'static str, id: i64) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => RepositoryError::AlreadyExists { entity_type, id },
            ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation
            | ErrorKind::ForeignKeyViolation => {
                RepositoryError::InvalidData(format!("{entity_type}: {}", db_err.message()))
            }
            _ => RepositoryError::QueryFailed(db_err.to_string()),
        },

        sqlx::Error::RowNotFound => RepositoryError::NotFound { entity_type, id },

        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::ConnectionFailed(err.to_string())
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps errors raised while opening the database or creating the schema.
pub fn map_connect_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::ConnectionFailed(err.to_string())
}
