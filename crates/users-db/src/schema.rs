//! Users table definition
//!
//! Schema management is left to operators. This statement documents the
//! table the repository expects and lets test suites prepare a scratch database.

use sqlx::PgPool;

/// DDL for the users table
pub const CREATE_USERS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS users (
    id           BIGSERIAL PRIMARY KEY,
    first_name   VARCHAR(255) NOT NULL DEFAULT '',
    last_name    VARCHAR(255) NOT NULL DEFAULT '',
    email        VARCHAR(255) NOT NULL UNIQUE,
    date_created VARCHAR(32)  NOT NULL,
    status       VARCHAR(64)  NOT NULL,
    password     VARCHAR(255) NOT NULL
)
";

/// Create the users table if it does not exist yet
pub async fn ensure_users_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    Ok(())
}
