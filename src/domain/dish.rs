//! Dish domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Dish entity.
///
/// Every dish is attributed to a chef; the referenced user must hold the
/// Chef role at creation time.
#[derive(Debug, Clone, Serialize)]
pub struct Dish {
    pub id: Uuid,
    pub chef_id: Uuid,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a dish
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDishInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

impl Dish {
    pub fn from_input(chef_id: Uuid, input: CreateDishInput) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            chef_id,
            name: input.name,
            description: input.description,
            ingredients: input.ingredients,
            price: input.price,
            created_at: now,
            updated_at: now,
        }
    }
}
