//! In-memory repository for tests
//!
//! Mirrors the PostgreSQL repository's observable behaviour: sequential IDs,
//! a unique email constraint, no password on reads, and id-ordered searches.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use users_core::entities::User;
use users_core::error::DomainError;
use users_core::traits::{RepoResult, UserRepository};

#[derive(Default)]
struct Store {
    next_id: i64,
    rows: BTreeMap<i64, User>,
}

/// `UserRepository` backed by a map
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
    failing: AtomicBool,
}

impl InMemoryUserRepository {
    /// Make every subsequent call fail as if the database were unreachable
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Stored row for `id`, including the password hash
    pub fn stored(&self, id: i64) -> Option<User> {
        self.store.lock().ok()?.rows.get(&id).cloned()
    }

    /// Number of stored rows
    pub fn len(&self) -> usize {
        self.store.lock().map(|store| store.rows.len()).unwrap_or_default()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, Store>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        self.store
            .lock()
            .map_err(|_| DomainError::DatabaseError("store poisoned".to_string()))
    }
}

fn without_password(user: &User) -> User {
    User {
        password: String::new(),
        ..user.clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: i64) -> RepoResult<User> {
        let store = self.lock()?;
        store
            .rows
            .get(&id)
            .map(without_password)
            .ok_or(DomainError::UserNotFound(id))
    }

    async fn save(&self, user: &mut User) -> RepoResult<()> {
        let mut store = self.lock()?;
        if store.rows.values().any(|row| row.email == user.email) {
            return Err(DomainError::EmailAlreadyExists(user.email.clone()));
        }
        store.next_id += 1;
        user.id = store.next_id;
        store.rows.insert(user.id, user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut store = self.lock()?;
        if store
            .rows
            .values()
            .any(|row| row.id != user.id && row.email == user.email)
        {
            return Err(DomainError::EmailAlreadyExists(user.email.clone()));
        }
        if let Some(row) = store.rows.get_mut(&user.id) {
            row.first_name.clone_from(&user.first_name);
            row.last_name.clone_from(&user.last_name);
            row.email.clone_from(&user.email);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.lock()?.rows.remove(&id);
        Ok(())
    }

    async fn find_by_status(&self, status: &str) -> RepoResult<Vec<User>> {
        let store = self.lock()?;
        let users: Vec<User> = store
            .rows
            .values()
            .filter(|row| row.status == status)
            .map(without_password)
            .collect();

        if users.is_empty() {
            return Err(DomainError::NoUsersWithStatus(status.to_string()));
        }
        Ok(users)
    }
}
