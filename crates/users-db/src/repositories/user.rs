//! PostgreSQL implementation of UserRepository
//!
//! Each method checks a connection out of the pool for the duration of one
//! statement. The `PoolConnection` guard returns it to the pool when dropped,
//! whichever way the method exits.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use users_core::entities::User;
use users_core::error::DomainError;
use users_core::traits::{RepoResult, UserRepository};

use crate::mappers::{UserInsert, UserUpdate};
use crate::models::UserModel;

use super::error::{map_db_error, map_not_found, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn get(&self, id: i64) -> RepoResult<User> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, first_name, last_name, email, date_created, status
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| map_not_found(e, || DomainError::UserNotFound(id)))?;

        Ok(User::from(model))
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn save(&self, user: &mut User) -> RepoResult<()> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;

        let insert = UserInsert::new(user);
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO users (first_name, last_name, email, date_created, status, password)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(insert.first_name)
        .bind(insert.last_name)
        .bind(insert.email)
        .bind(insert.date_created)
        .bind(insert.status)
        .bind(insert.password)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::EmailAlreadyExists(user.email.clone()))
        })?;

        user.id = id;
        debug!(user_id = id, "User row inserted");

        Ok(())
    }

    #[instrument(skip(self, user), fields(user_id = user.id))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;

        let update = UserUpdate::new(user);
        sqlx::query(
            r"
            UPDATE users
            SET first_name = $2, last_name = $3, email = $4
            WHERE id = $1
            ",
        )
        .bind(update.id)
        .bind(update.first_name)
        .bind(update.last_name)
        .bind(update.email)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::EmailAlreadyExists(user.email.clone()))
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

        debug!(rows = result.rows_affected(), "User delete executed");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_status(&self, status: &str) -> RepoResult<Vec<User>> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;

        let models = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, first_name, last_name, email, date_created, status
            FROM users
            WHERE status = $1
            ORDER BY id
            ",
        )
        .bind(status)
        .fetch_all(&mut *conn)
        .await
        .map_err(map_db_error)?;

        if models.is_empty() {
            return Err(DomainError::NoUsersWithStatus(status.to_string()));
        }

        Ok(models.into_iter().map(User::from).collect())
    }
}
