//! Order domain model and status state machine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order status.
///
/// Progression is forward-only and single-step: Pending -> Approved ->
/// Delivered. Delivered is terminal. "Adjust" is accepted on input as a
/// legacy label for Pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(alias = "Adjust")]
    Pending,
    Approved,
    Delivered,
}

impl OrderStatus {
    /// Whether a transition from `self` to `next` is allowed.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Approved)
                | (OrderStatus::Approved, OrderStatus::Delivered)
        )
    }
}

/// Order entity.
///
/// `chef_id` and `total_price` are snapshots taken from the dish at creation
/// time; they are never recomputed, so historical orders stay stable even if
/// the dish is later changed.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub chef_id: Uuid,
    pub dish_id: Uuid,
    pub customizations: Vec<String>,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an order
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CreateOrderInput {
    #[serde(default)]
    pub customizations: Vec<String>,
}

/// Input for transitioning an order's status
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatusInput {
    pub status: OrderStatus,
}
