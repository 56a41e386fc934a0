//! Restaurant domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Restaurant entity (public resource, no owner link)
#[derive(Debug, Clone, Serialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a restaurant
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRestaurantInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub address: String,
    pub phone: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub description: String,
}

impl Restaurant {
    pub fn from_input(input: CreateRestaurantInput) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            address: input.address,
            phone: input.phone,
            email: input.email,
            description: input.description,
            created_at: now,
            updated_at: now,
        }
    }
}
