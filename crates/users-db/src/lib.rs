//! # users-db
//!
//! Database layer implementing the user repository with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database model with SQLx `FromRow` derive
//! - Entity ↔ Model mapper
//! - Repository implementation and driver error classification
//!
//! ## Usage
//!
//! ```rust,ignore
//! use users_db::pool::{create_pool, DatabaseConfig};
//! use users_db::repositories::PgUserRepository;
//! use users_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: std::env::var("DATABASE_URL")?,
//!         ..Default::default()
//!     };
//!     let pool = create_pool(&config).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     let user = user_repo.get(1).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::PgUserRepository;
