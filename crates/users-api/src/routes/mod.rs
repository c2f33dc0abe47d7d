//! Route definitions
//!
//! User routes plus the liveness and readiness checks.

use axum::{routing::get, Router};

use crate::handlers::{health, users};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().merge(health_routes()).merge(user_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(health::ping))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(users::search_users).post(users::create_user),
        )
        .route(
            "/users/:user_id",
            get(users::get_user)
                .put(users::replace_user)
                .patch(users::patch_user)
                .delete(users::delete_user),
        )
}
