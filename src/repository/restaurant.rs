//! Restaurant repository

use crate::domain::Restaurant;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn insert(&self, restaurant: Restaurant) -> Result<Restaurant>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>>;
    async fn list(&self) -> Result<Vec<Restaurant>>;
}

#[derive(Clone, Default)]
pub struct InMemoryRestaurantRepository {
    store: Arc<RwLock<BTreeMap<Uuid, Restaurant>>>,
}

impl InMemoryRestaurantRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn insert(&self, restaurant: Restaurant) -> Result<Restaurant> {
        let mut store = self.store.write().await;
        store.insert(restaurant.id, restaurant.clone());
        Ok(restaurant)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Restaurant>> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }
}
