//! Restaurant management

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::config::ValidationConfig;
use crate::domain::{CreateRestaurantInput, Restaurant};
use crate::error::{AppError, Result};
use crate::repository::RestaurantRepository;

pub struct RestaurantService<R: RestaurantRepository> {
    restaurant_repo: Arc<R>,
    validation: ValidationConfig,
}

impl<R: RestaurantRepository> RestaurantService<R> {
    pub fn new(restaurant_repo: Arc<R>, validation: ValidationConfig) -> Self {
        Self {
            restaurant_repo,
            validation,
        }
    }

    pub async fn create(&self, input: CreateRestaurantInput) -> Result<Restaurant> {
        if self.validation.enabled {
            input.validate()?;
        }
        self.restaurant_repo
            .insert(Restaurant::from_input(input))
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<Restaurant> {
        self.restaurant_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Restaurant>> {
        self.restaurant_repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRestaurantRepository;

    fn valid_input() -> CreateRestaurantInput {
        CreateRestaurantInput {
            name: "Trattoria".to_string(),
            address: "1 Main St".to_string(),
            phone: "555-0100".to_string(),
            email: "info@trattoria.example".to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = RestaurantService::new(
            Arc::new(InMemoryRestaurantRepository::new()),
            ValidationConfig::default(),
        );
        let created = service.create(valid_input()).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched.name, "Trattoria");
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let service = RestaurantService::new(
            Arc::new(InMemoryRestaurantRepository::new()),
            ValidationConfig::default(),
        );
        let result = service.get(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
