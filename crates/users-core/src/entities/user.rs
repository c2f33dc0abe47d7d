//! User entity - represents a stored user record

use crate::error::DomainError;

/// Status assigned to every newly created user
pub const STATUS_ACTIVE: &str = "active";

/// User entity
///
/// `password` holds the plaintext only between request parsing and hashing in
/// the service layer. Records loaded from storage carry an empty password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_created: String,
    pub status: String,
    pub password: String,
}

impl User {
    /// Normalize and check the fields required to create a user.
    ///
    /// Names are trimmed, the email is trimmed and lowercased, and the
    /// password is trimmed. Fails if the email or password ends up empty.
    pub fn validate(&mut self) -> Result<(), DomainError> {
        self.normalize_names_and_email();
        if self.email.is_empty() {
            return Err(DomainError::InvalidEmail);
        }

        self.password = self.password.trim().to_string();
        if self.password.is_empty() {
            return Err(DomainError::InvalidPassword);
        }

        Ok(())
    }

    /// Trim the names and bring the email into canonical form, without any
    /// presence checks
    pub fn normalize_names_and_email(&mut self) {
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
    }
}
