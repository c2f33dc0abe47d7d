//! Entity to DTO mappers
//!
//! Implements `From` conversions from the user entity to its views and the
//! view selection used by the HTTP handlers.

use users_core::entities::User;

use super::responses::{PrivateUser, PublicUser, UserView};

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            date_created: user.date_created.clone(),
            status: user.status.clone(),
        }
    }
}

impl From<&User> for PrivateUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            date_created: user.date_created.clone(),
            status: user.status.clone(),
        }
    }
}

impl UserView {
    /// Select the view for one user
    pub fn from_user(user: &User, is_public: bool) -> Self {
        if is_public {
            Self::Public(user.into())
        } else {
            Self::Private(user.into())
        }
    }
}

/// Map a list of users to views, preserving order
pub fn marshal_users(users: &[User], is_public: bool) -> Vec<UserView> {
    users
        .iter()
        .map(|user| UserView::from_user(user, is_public))
        .collect()
}
