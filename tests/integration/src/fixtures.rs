//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Includes the process ID so reruns against the same database never collide.
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}_{n}", std::process::id())
}

/// Create user request
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            first_name: "Test".to_string(),
            last_name: format!("User {suffix}"),
            email: format!("Test_{suffix}@Example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Private user view
#[derive(Debug, Deserialize)]
pub struct PrivateUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_created: String,
    pub status: String,
}

/// Public user view
#[derive(Debug, Deserialize)]
pub struct PublicUser {
    pub id: i64,
    pub date_created: String,
    pub status: String,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
    pub error: String,
}
