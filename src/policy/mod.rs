//! Role-based authorization checks
//!
//! Stage 2 of the request gate: given an already-authenticated user, check
//! membership in an allowed role set. Runs after identity resolution, never
//! before.

use crate::domain::{Role, User};
use crate::error::{AppError, Result};

/// Require that the user's role is in the allowed set.
pub fn require_role(user: &User, allowed: &[Role]) -> Result<()> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(AppError::Forbidden("You are unauthorized".to_string()))
    }
}
