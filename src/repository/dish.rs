//! Dish repository

use crate::domain::Dish;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DishRepository: Send + Sync {
    async fn insert(&self, dish: Dish) -> Result<Dish>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Dish>>;
    async fn list(&self) -> Result<Vec<Dish>>;
}

#[derive(Clone, Default)]
pub struct InMemoryDishRepository {
    store: Arc<RwLock<BTreeMap<Uuid, Dish>>>,
}

impl InMemoryDishRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DishRepository for InMemoryDishRepository {
    async fn insert(&self, dish: Dish) -> Result<Dish> {
        let mut store = self.store.write().await;
        store.insert(dish.id, dish.clone());
        Ok(dish)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Dish>> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Dish>> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }
}
