//! Order management
//!
//! Orders snapshot the dish's chef and price at creation time. Reads are
//! role-scoped: customers see their own orders, chefs the orders assigned to
//! them, admins everything.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{CreateOrderInput, Order, OrderStatus, Role, User};
use crate::error::{AppError, Result};
use crate::repository::{DishRepository, OrderRepository};

pub struct OrderService<O: OrderRepository, D: DishRepository> {
    order_repo: Arc<O>,
    dish_repo: Arc<D>,
}

impl<O: OrderRepository, D: DishRepository> OrderService<O, D> {
    pub fn new(order_repo: Arc<O>, dish_repo: Arc<D>) -> Self {
        Self {
            order_repo,
            dish_repo,
        }
    }

    /// Place an order for a dish.
    pub async fn create(
        &self,
        customer: &User,
        dish_id: Uuid,
        input: CreateOrderInput,
    ) -> Result<Order> {
        let dish = self
            .dish_repo
            .find_by_id(dish_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Dish not found".to_string()))?;

        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            customer_id: customer.id,
            chef_id: dish.chef_id,
            dish_id: dish.id,
            customizations: input.customizations,
            total_price: dish.price,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.order_repo.insert(order).await
    }

    /// Transition an order's status. Only forward single-step moves are
    /// valid; Delivered is terminal.
    pub async fn change_status(&self, order_id: Uuid, next: OrderStatus) -> Result<Order> {
        let mut order = self
            .order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        if !order.status.can_transition_to(next) {
            return Err(AppError::Validation(format!(
                "Cannot transition order from {:?} to {:?}",
                order.status, next
            )));
        }

        order.status = next;
        order.updated_at = Utc::now();
        self.order_repo.update(order).await
    }

    /// List orders visible to the caller.
    pub async fn list_for(&self, actor: &User) -> Result<Vec<Order>> {
        match actor.role {
            Role::Admin => self.order_repo.list().await,
            Role::Chef => self.order_repo.list_by_chef(actor.id).await,
            Role::Customer => self.order_repo.list_by_customer(actor.id).await,
        }
    }

    /// Fetch a single order. Permitted for the customer or chef party on the
    /// order, or any admin.
    pub async fn get_for(&self, actor: &User, order_id: Uuid) -> Result<Order> {
        let order = self
            .order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        let permitted = actor.role == Role::Admin
            || order.customer_id == actor.id
            || order.chef_id == actor.id;
        if !permitted {
            return Err(AppError::Forbidden("You are unauthorized".to_string()));
        }

        Ok(order)
    }
}
