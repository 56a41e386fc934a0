//! Menu repository

use crate::domain::Menu;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn insert(&self, menu: Menu) -> Result<Menu>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Menu>>;
    async fn list(&self) -> Result<Vec<Menu>>;
    /// Whole-value replacement under the same key
    async fn update(&self, menu: Menu) -> Result<Menu>;
}

#[derive(Clone, Default)]
pub struct InMemoryMenuRepository {
    store: Arc<RwLock<BTreeMap<Uuid, Menu>>>,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn insert(&self, menu: Menu) -> Result<Menu> {
        let mut store = self.store.write().await;
        store.insert(menu.id, menu.clone());
        Ok(menu)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Menu>> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Menu>> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn update(&self, menu: Menu) -> Result<Menu> {
        let mut store = self.store.write().await;
        if !store.contains_key(&menu.id) {
            return Err(AppError::NotFound(format!("Menu {} not found", menu.id)));
        }
        store.insert(menu.id, menu.clone());
        Ok(menu)
    }
}
