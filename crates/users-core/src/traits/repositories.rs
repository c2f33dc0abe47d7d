//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Keeping storage behind a trait lets the
//! service and HTTP layers run against an in-memory store in tests.

use async_trait::async_trait;

use crate::entities::User;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by ID, without its password.
    ///
    /// Fails with `UserNotFound` if no row matches.
    async fn get(&self, id: i64) -> RepoResult<User>;

    /// Insert a new user and assign the generated ID back onto it.
    ///
    /// Fails with `EmailAlreadyExists` when the email is taken.
    async fn save(&self, user: &mut User) -> RepoResult<()>;

    /// Overwrite first name, last name, and email of the row matching `user.id`.
    ///
    /// No existence check: callers fetch first.
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Remove the row matching `id`. Removing a missing row is not an error.
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Fetch every user with the given status, in storage order.
    ///
    /// Fails with `NoUsersWithStatus` when nothing matches.
    async fn find_by_status(&self, status: &str) -> RepoResult<Vec<User>>;
}
