//! Error handling utilities for repositories
//!
//! Every SQLx failure passes through one of these helpers, which decide the
//! domain error the caller sees. Unclassified failures are logged here with
//! the raw driver detail; only a generic message travels further up.

use sqlx::Error as SqlxError;
use tracing::error;
use users_core::error::DomainError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    error!(error = %e, "Database operation failed");
    DomainError::DatabaseError(e.to_string())
}

/// Map "no rows" to the given error, anything else to a database error
pub fn map_not_found<F>(e: SqlxError, on_missing: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if matches!(e, SqlxError::RowNotFound) {
        return on_missing();
    }
    map_db_error(e)
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = map_not_found(SqlxError::RowNotFound, || DomainError::UserNotFound(5));
        assert!(matches!(err, DomainError::UserNotFound(5)));
    }

    #[test]
    fn test_other_errors_map_to_database_error() {
        let err = map_not_found(SqlxError::PoolTimedOut, || DomainError::UserNotFound(5));
        assert!(matches!(err, DomainError::DatabaseError(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        let err = map_unique_violation(SqlxError::PoolClosed, || {
            DomainError::EmailAlreadyExists("a@b.io".to_string())
        });
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
