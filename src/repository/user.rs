//! User repository (the credential store)

use crate::domain::{Role, User};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> Result<User>;
    /// Insert a new user under a single write guard: rejects a duplicate
    /// email with Conflict and promotes the first user ever stored to Admin.
    /// Registration must go through here; a separate check-then-insert would
    /// let two concurrent registrations both pass the checks.
    async fn insert_unique(&self, user: User) -> Result<User>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn list(&self) -> Result<Vec<User>>;
    /// Whole-value replacement under the same key
    async fn update(&self, user: User) -> Result<User>;
}

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<BTreeMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<User> {
        let mut store = self.store.write().await;
        store.insert(user.id, user.clone());
        Ok(user)
    }

    async fn insert_unique(&self, mut user: User) -> Result<User> {
        let mut store = self.store.write().await;
        if store.values().any(|u| u.email == user.email) {
            return Err(AppError::Conflict("User already exists".to_string()));
        }
        if store.is_empty() {
            user.role = Role::Admin;
        }
        store.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let store = self.store.read().await;
        Ok(store.values().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn update(&self, user: User) -> Result<User> {
        let mut store = self.store.write().await;
        if !store.contains_key(&user.id) {
            return Err(AppError::NotFound(format!("User {} not found", user.id)));
        }
        store.insert(user.id, user.clone());
        Ok(user)
    }
}
