//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("user {0} not found")]
    UserNotFound(i64),

    #[error("no users matching status {0}")]
    NoUsersWithStatus(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid password")]
    InvalidPassword,

    #[error("invalid user id")]
    InvalidUserId,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("email {0} already exists")]
    EmailAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::NoUsersWithStatus(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidEmail | Self::InvalidPassword | Self::InvalidUserId
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists(_))
    }
}
