//! Response types and error handling for API endpoints
//!
//! Every failure leaves the server as an `ErrorResponse` body carrying one of
//! the three application error kinds.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;
use users_common::{AppError, ErrorResponse};
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("invalid json body")]
    InvalidJson,

    #[error("user id should be a number")]
    InvalidUserId,

    #[error("invalid query parameters")]
    InvalidQuery,

    #[error("{0}")]
    Validation(#[from] ValidationErrors),
}

impl ApiError {
    /// Collapse into the application error taxonomy
    #[must_use]
    pub fn to_app_error(&self) -> AppError {
        match self {
            Self::App(e) => e.clone(),
            Self::InvalidJson | Self::InvalidUserId | Self::InvalidQuery | Self::Validation(_) => {
                AppError::bad_request(self)
            }
        }
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.to_app_error().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let app_error = self.to_app_error();

        // Log server errors
        if app_error.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        (status, Json(ErrorResponse::from(app_error))).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
