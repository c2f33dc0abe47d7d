//! # users-service
//!
//! Application layer containing the user service, request DTOs, and the
//! public/private presentation views.

pub mod dto;
pub mod services;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use dto::{
    marshal_users, CreateUserRequest, DeleteResponse, HealthResponse, PrivateUser, PublicUser,
    ReadinessResponse, SearchQuery, UpdateUserRequest, UserView,
};
pub use services::{ServiceContext, ServiceContextBuilder, UserService};
