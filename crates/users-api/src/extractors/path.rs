//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::response::ApiError;

/// Numeric `user_id` path parameter
///
/// Anything that does not parse as an `i64` is rejected with
/// `user id should be a number`. Range checks belong to the service.
#[derive(Debug, Clone, Copy)]
pub struct UserIdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidUserId)?;

        raw.parse().map(UserIdPath).map_err(|_| ApiError::InvalidUserId)
    }
}
