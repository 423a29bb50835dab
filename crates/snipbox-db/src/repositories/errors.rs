//! Classification of `sqlx` errors into `RepositoryError`.
//!
//! Constraint failures are recognised through `DatabaseError::kind()` so
//! the mapping does not depend on `SQLite` extended result codes.

use snipbox_core::RepositoryError;
use sqlx::error::ErrorKind;

/// Convert a `sqlx` error into the port's error type, keeping the detail.
pub(crate) fn store_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound(err.to_string()),
        sqlx::Error::Database(db) => {
            let detail = db.message().to_string();
            match db.kind() {
                ErrorKind::UniqueViolation => RepositoryError::AlreadyExists(detail),
                ErrorKind::ForeignKeyViolation => RepositoryError::InvalidReference(detail),
                ErrorKind::NotNullViolation => RepositoryError::MissingField(detail),
                _ => RepositoryError::Storage(detail),
            }
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::Serialization(err.to_string())
        }
        _ => RepositoryError::Storage(err.to_string()),
    }
}
