//! Order repository

use crate::domain::Order;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn insert(&self, order: Order) -> Result<Order>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>>;
    async fn list(&self) -> Result<Vec<Order>>;
    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<Order>>;
    async fn list_by_chef(&self, chef_id: Uuid) -> Result<Vec<Order>>;
    /// Whole-value replacement under the same key
    async fn update(&self, order: Order) -> Result<Order>;
}

#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    store: Arc<RwLock<BTreeMap<Uuid, Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert(&self, order: Order) -> Result<Order> {
        let mut store = self.store.write().await;
        store.insert(order.id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<Order>> {
        let store = self.store.read().await;
        Ok(store
            .values()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn list_by_chef(&self, chef_id: Uuid) -> Result<Vec<Order>> {
        let store = self.store.read().await;
        Ok(store
            .values()
            .filter(|o| o.chef_id == chef_id)
            .cloned()
            .collect())
    }

    async fn update(&self, order: Order) -> Result<Order> {
        let mut store = self.store.write().await;
        if !store.contains_key(&order.id) {
            return Err(AppError::NotFound(format!("Order {} not found", order.id)));
        }
        store.insert(order.id, order.clone());
        Ok(order)
    }
}
