//! # users-common
//!
//! Shared utilities including configuration, error handling, password hashing,
//! date formatting, and telemetry.

pub mod config;
pub mod dates;
pub mod error;
pub mod security;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, ServerConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use security::{hash_password, verify_password};
pub use telemetry::{try_init_tracing_with_config, TracingConfig, TracingError};
