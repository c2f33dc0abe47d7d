//! User service
//!
//! Orchestrates the user lifecycle: validation and defaulting on create,
//! the partial/full merge on update, and the pass-through reads.

use tracing::{info, instrument};
use users_common::{dates, hash_password, AppResult};
use users_core::entities::{User, STATUS_ACTIVE};
use users_core::error::DomainError;

use super::context::ServiceContext;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate, default, and persist a new user.
    ///
    /// The returned user carries its generated ID and the password hash.
    #[instrument(skip(self, user))]
    pub async fn create_user(&self, mut user: User) -> AppResult<User> {
        user.validate()?;

        user.status = STATUS_ACTIVE.to_string();
        user.date_created = dates::now_db_string();
        user.password = hash_password(&user.password)?;

        self.ctx.user_repo().save(&mut user).await?;

        info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: i64) -> AppResult<User> {
        if user_id <= 0 {
            return Err(DomainError::InvalidUserId.into());
        }

        Ok(self.ctx.user_repo().get(user_id).await?)
    }

    /// Update first name, last name, and email of an existing user.
    ///
    /// In partial mode only non-empty incoming fields are applied. In full
    /// mode all three are overwritten, so a field can be cleared.
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn update_user(&self, is_partial: bool, mut user: User) -> AppResult<User> {
        let mut current = self.get_user(user.id).await?;

        user.normalize_names_and_email();
        if is_partial {
            if !user.first_name.is_empty() {
                current.first_name = user.first_name;
            }
            if !user.last_name.is_empty() {
                current.last_name = user.last_name;
            }
            if !user.email.is_empty() {
                current.email = user.email;
            }
        } else {
            current.first_name = user.first_name;
            current.last_name = user.last_name;
            current.email = user.email;
        }

        self.ctx.user_repo().update(&current).await?;

        info!(user_id = current.id, partial = is_partial, "User updated");
        Ok(current)
    }

    /// Delete a user. Deleting a missing user succeeds.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: i64) -> AppResult<()> {
        self.ctx.user_repo().delete(user_id).await?;

        info!(user_id, "User deleted");
        Ok(())
    }

    /// Find users by status. The status is passed to storage as given.
    #[instrument(skip(self))]
    pub async fn search(&self, status: &str) -> AppResult<Vec<User>> {
        Ok(self.ctx.user_repo().find_by_status(status).await?)
    }
}
