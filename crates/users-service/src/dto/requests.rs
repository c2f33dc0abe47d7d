//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`. Missing fields default to empty
//! strings; presence rules are enforced by the service, not here.

use serde::Deserialize;
use users_core::entities::User;
use validator::Validate;

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateUserRequest {
    #[validate(length(max = 255, message = "first_name must be at most 255 characters"))]
    pub first_name: String,

    #[validate(length(max = 255, message = "last_name must be at most 255 characters"))]
    pub last_name: String,

    #[validate(length(max = 255, message = "email must be at most 255 characters"))]
    pub email: String,

    pub password: String,
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            ..Self::default()
        }
    }
}

/// Update user request, used for both full (PUT) and partial (PATCH) updates
///
/// Any `id`, `status`, `date_created`, or `password` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateUserRequest {
    #[validate(length(max = 255, message = "first_name must be at most 255 characters"))]
    pub first_name: String,

    #[validate(length(max = 255, message = "last_name must be at most 255 characters"))]
    pub last_name: String,

    #[validate(length(max = 255, message = "email must be at most 255 characters"))]
    pub email: String,
}

impl UpdateUserRequest {
    /// Build the incoming user for `user_id`; the path ID always wins
    pub fn into_user(self, user_id: i64) -> User {
        User {
            id: user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            ..User::default()
        }
    }
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query for searching users by status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub status: String,
}
