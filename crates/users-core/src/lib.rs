//! # users-core
//!
//! Domain layer containing the user entity, its validation rules, domain errors,
//! and the repository trait implemented by the storage layer.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{User, STATUS_ACTIVE};
pub use error::DomainError;
pub use traits::{RepoResult, UserRepository};
