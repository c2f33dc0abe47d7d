//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs and the public/private user views
//! - Mappers for converting domain entities to views

pub mod mappers;
pub mod requests;
pub mod responses;

pub use mappers::marshal_users;
pub use requests::{CreateUserRequest, SearchQuery, UpdateUserRequest};
pub use responses::{
    DeleteResponse, HealthChecks, HealthResponse, PrivateUser, PublicUser, ReadinessResponse,
    UserView,
};
