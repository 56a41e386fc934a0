//! Dish management

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::config::ValidationConfig;
use crate::domain::{CreateDishInput, Dish, Role};
use crate::error::{AppError, Result};
use crate::repository::{DishRepository, UserRepository};

pub struct DishService<D: DishRepository, U: UserRepository> {
    dish_repo: Arc<D>,
    user_repo: Arc<U>,
    validation: ValidationConfig,
}

impl<D: DishRepository, U: UserRepository> DishService<D, U> {
    pub fn new(dish_repo: Arc<D>, user_repo: Arc<U>, validation: ValidationConfig) -> Self {
        Self {
            dish_repo,
            user_repo,
            validation,
        }
    }

    /// Create a dish attributed to a chef.
    ///
    /// The referenced user must exist and hold the Chef role.
    pub async fn create(&self, chef_id: Uuid, input: CreateDishInput) -> Result<Dish> {
        if self.validation.enabled {
            input.validate()?;
        }
        if input.price < 0.0 {
            return Err(AppError::Validation("price must be >= 0".to_string()));
        }

        let chef = self
            .user_repo
            .find_by_id(chef_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chef not found".to_string()))?;

        if chef.role != Role::Chef {
            return Err(AppError::Forbidden(
                "Referenced user is not a chef".to_string(),
            ));
        }

        self.dish_repo.insert(Dish::from_input(chef_id, input)).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Dish> {
        self.dish_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Dish not found".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Dish>> {
        self.dish_repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::repository::user::MockUserRepository;
    use crate::repository::{InMemoryDishRepository, InMemoryUserRepository, UserRepository as _};

    fn dish_input() -> CreateDishInput {
        CreateDishInput {
            name: "Carbonara".to_string(),
            description: String::new(),
            ingredients: vec!["egg".to_string()],
            price: 12.5,
        }
    }

    #[tokio::test]
    async fn test_create_under_chef() {
        let user_repo = Arc::new(InMemoryUserRepository::new());
        let chef = User::new("chef@x.com".into(), "hash".into(), Role::Chef);
        let chef_id = chef.id;
        user_repo.insert(chef).await.unwrap();

        let service = DishService::new(
            Arc::new(InMemoryDishRepository::new()),
            user_repo,
            ValidationConfig::default(),
        );
        let dish = service.create(chef_id, dish_input()).await.unwrap();
        assert_eq!(dish.chef_id, chef_id);
        assert_eq!(dish.price, 12.5);
    }

    #[tokio::test]
    async fn test_create_under_non_chef_is_forbidden() {
        let user_repo = Arc::new(InMemoryUserRepository::new());
        let customer = User::new("c@x.com".into(), "hash".into(), Role::Customer);
        let customer_id = customer.id;
        user_repo.insert(customer).await.unwrap();

        let service = DishService::new(
            Arc::new(InMemoryDishRepository::new()),
            user_repo,
            ValidationConfig::default(),
        );
        let result = service.create(customer_id, dish_input()).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_create_under_unknown_chef_is_not_found() {
        let mut mock = MockUserRepository::new();
        mock.expect_find_by_id().returning(|_| Ok(None));

        let service = DishService::new(
            Arc::new(InMemoryDishRepository::new()),
            Arc::new(mock),
            ValidationConfig::default(),
        );
        let result = service.create(Uuid::new_v4(), dish_input()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
