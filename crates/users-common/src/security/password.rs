//! Password hashing and verification utilities
//!
//! Uses Argon2id. Stored values are PHC strings carrying their own salt.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::error;

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an internal error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            error!(error = %e, "Password hashing failed");
            AppError::internal("error processing request")
        })
}

/// Verify a password against a stored hash
///
/// # Errors
/// Returns an internal error if the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "Invalid password hash format");
        AppError::internal("error processing request")
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
