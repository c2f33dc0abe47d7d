//! User database model

use sqlx::FromRow;

/// Database model for the users table, without the password column
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_created: String,
    pub status: String,
}
