//! User administration

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Role, User};
use crate::error::{AppError, Result};
use crate::repository::UserRepository;

pub struct UserService<U: UserRepository> {
    user_repo: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.user_repo.list().await
    }

    /// Change a user's role. Admin-only at the boundary.
    pub async fn change_role(&self, user_id: Uuid, role: Role) -> Result<User> {
        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        user.role = role;
        user.updated_at = Utc::now();
        self.user_repo.update(user).await
    }
}
