//! Service context - dependency container for services

use std::sync::Arc;

use users_common::{AppError, AppResult};
use users_core::traits::UserRepository;

/// Service context containing all dependencies
///
/// Built once by the composition root and shared behind an `Arc`. Services
/// borrow it for the duration of a request.
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("user_repo", &"dyn UserRepository")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns an internal error if a required dependency is missing
    pub fn build(self) -> AppResult<ServiceContext> {
        let user_repo = self
            .user_repo
            .ok_or_else(|| AppError::internal("user_repo is required"))?;

        Ok(ServiceContext::new(user_repo))
    }
}
