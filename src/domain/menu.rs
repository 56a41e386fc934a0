//! Menu domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Menu entity.
///
/// Dish membership lives here: a dish id appears at most once per menu.
#[derive(Debug, Clone, Serialize)]
pub struct Menu {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub title: String,
    pub description: String,
    pub dish_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a menu
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMenuInput {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Menu {
    pub fn from_input(restaurant_id: Uuid, input: CreateMenuInput) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            restaurant_id,
            title: input.title,
            description: input.description,
            dish_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
