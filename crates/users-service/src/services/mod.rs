//! Business logic services
//!
//! Service layer implementations that handle validation and orchestration of
//! domain operations.

pub mod context;
pub mod user;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use user::UserService;
