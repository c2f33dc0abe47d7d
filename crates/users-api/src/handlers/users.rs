//! User handlers
//!
//! CRUD endpoints and status search over user records.

use axum::{extract::State, Json};
use users_service::{
    marshal_users, CreateUserRequest, DeleteResponse, SearchQuery, UpdateUserRequest, UserService,
    UserView,
};

use crate::extractors::{PublicView, QueryParams, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    PublicView(is_public): PublicView,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserView>>> {
    let service = UserService::new(state.service_context());
    let user = service.create_user(request.into()).await?;
    Ok(Created(Json(UserView::from_user(&user, is_public))))
}

/// Get user by ID
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
    PublicView(is_public): PublicView,
) -> ApiResult<Json<UserView>> {
    let service = UserService::new(state.service_context());
    let user = service.get_user(user_id).await?;
    Ok(Json(UserView::from_user(&user, is_public)))
}

/// Replace first name, last name, and email
///
/// PUT /users/{user_id}
pub async fn replace_user(
    state: State<AppState>,
    user_id: UserIdPath,
    public: PublicView,
    request: ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserView>> {
    update(state, user_id, public, request, false).await
}

/// Update only the provided, non-empty fields
///
/// PATCH /users/{user_id}
pub async fn patch_user(
    state: State<AppState>,
    user_id: UserIdPath,
    public: PublicView,
    request: ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserView>> {
    update(state, user_id, public, request, true).await
}

async fn update(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
    PublicView(is_public): PublicView,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
    is_partial: bool,
) -> ApiResult<Json<UserView>> {
    let service = UserService::new(state.service_context());
    let user = service
        .update_user(is_partial, request.into_user(user_id))
        .await?;
    Ok(Json(UserView::from_user(&user, is_public)))
}

/// Delete a user
///
/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<Json<DeleteResponse>> {
    let service = UserService::new(state.service_context());
    service.delete_user(user_id).await?;
    Ok(Json(DeleteResponse::deleted()))
}

/// Search users by status
///
/// GET /users?status={status}
pub async fn search_users(
    State(state): State<AppState>,
    PublicView(is_public): PublicView,
    QueryParams(query): QueryParams<SearchQuery>,
) -> ApiResult<Json<Vec<UserView>>> {
    let service = UserService::new(state.service_context());
    let users = service.search(&query.status).await?;
    Ok(Json(marshal_users(&users, is_public)))
}
