//! Application error types
//!
//! The three error kinds the API exposes. Every failure that reaches a
//! client is one of these, carrying its message, HTTP status, and kind string.

use serde::Serialize;
use std::fmt;
use users_core::DomainError;

/// Message returned in place of raw storage failures
const GENERIC_DATABASE_MESSAGE: &str = "database error";

/// Application-wide error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Malformed input, failed validation, or a uniqueness conflict
    #[error("{0}")]
    BadRequest(String),

    /// No matching record
    #[error("{0}")]
    NotFound(String),

    /// Unexpected storage or infrastructure failure
    #[error("{0}")]
    InternalServerError(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) => 404,
            Self::InternalServerError(_) => 500,
        }
    }

    /// Get the machine-readable kind for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::NotFound(_) => "not_found",
            Self::InternalServerError(_) => "internal_server_error",
        }
    }

    /// Get the client-facing message
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(msg) | Self::NotFound(msg) | Self::InternalServerError(msg) => msg,
        }
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::InternalServerError(_))
    }

    /// Create a bad request error
    #[must_use]
    pub fn bad_request(msg: impl fmt::Display) -> Self {
        Self::BadRequest(msg.to_string())
    }

    /// Create an internal server error
    #[must_use]
    pub fn internal(msg: impl fmt::Display) -> Self {
        Self::InternalServerError(msg.to_string())
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        if err.is_not_found() {
            Self::NotFound(err.to_string())
        } else if err.is_validation() || err.is_conflict() {
            Self::BadRequest(err.to_string())
        } else {
            Self::InternalServerError(GENERIC_DATABASE_MESSAGE.to_string())
        }
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
    pub error: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            message: err.message().to_string(),
            status: err.status_code(),
            error: err.error_code().to_string(),
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
