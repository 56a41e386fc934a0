//! Menu management
//!
//! The store enforces no foreign keys, so the cross-entity invariants live
//! here: a menu must reference an existing restaurant, and a dish appears at
//! most once per menu.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::config::ValidationConfig;
use crate::domain::{CreateMenuInput, Menu};
use crate::error::{AppError, Result};
use crate::repository::{DishRepository, MenuRepository, RestaurantRepository};

pub struct MenuService<M: MenuRepository, R: RestaurantRepository, D: DishRepository> {
    menu_repo: Arc<M>,
    restaurant_repo: Arc<R>,
    dish_repo: Arc<D>,
    validation: ValidationConfig,
}

impl<M: MenuRepository, R: RestaurantRepository, D: DishRepository> MenuService<M, R, D> {
    pub fn new(
        menu_repo: Arc<M>,
        restaurant_repo: Arc<R>,
        dish_repo: Arc<D>,
        validation: ValidationConfig,
    ) -> Self {
        Self {
            menu_repo,
            restaurant_repo,
            dish_repo,
            validation,
        }
    }

    /// Create a menu under an existing restaurant.
    pub async fn create(&self, restaurant_id: Uuid, input: CreateMenuInput) -> Result<Menu> {
        if self.validation.enabled {
            input.validate()?;
        }

        if self
            .restaurant_repo
            .find_by_id(restaurant_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Restaurant does not exist".to_string()));
        }

        self.menu_repo
            .insert(Menu::from_input(restaurant_id, input))
            .await
    }

    /// Attach an existing dish to a menu. A dish appears at most once.
    pub async fn attach_dish(&self, menu_id: Uuid, dish_id: Uuid) -> Result<Menu> {
        let mut menu = self
            .menu_repo
            .find_by_id(menu_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Menu not found".to_string()))?;

        if self.dish_repo.find_by_id(dish_id).await?.is_none() {
            return Err(AppError::NotFound("Dish not found".to_string()));
        }

        if menu.dish_ids.contains(&dish_id) {
            return Err(AppError::Conflict(
                "Dish is already on this menu".to_string(),
            ));
        }

        menu.dish_ids.push(dish_id);
        menu.updated_at = Utc::now();
        self.menu_repo.update(menu).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Menu> {
        self.menu_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Menu not found".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Menu>> {
        self.menu_repo.list().await
    }
}
