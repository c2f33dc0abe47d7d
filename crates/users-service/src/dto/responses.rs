//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. The private view
//! is the full record minus the password; the public view exposes only the
//! non-identifying fields.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// User Views
// ============================================================================

/// User as seen by external callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub date_created: String,
    pub status: String,
}

/// User as seen by internal callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrivateUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_created: String,
    pub status: String,
}

/// Either view, serialized without a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UserView {
    Public(PublicUser),
    Private(PrivateUser),
}

/// Body returned after a delete
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self { status: "deleted" }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            timestamp: Utc::now(),
        }
    }
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
    pub timestamp: DateTime<Utc>,
}

/// Individual dependency checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "not_ready" },
            checks: HealthChecks { database },
            timestamp: Utc::now(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.checks.database
    }
}
