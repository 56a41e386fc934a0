//! Application state traits for dependency injection
//!
//! Abstracts the pieces of application state the authentication extractor
//! needs, so the same extractor code works against the production `AppState`
//! and against test states.

use std::sync::Arc;

use crate::jwt::JwtManager;
use crate::repository::UserRepository;

/// Trait for application state that can resolve identities.
pub trait HasAuth: Clone + Send + Sync + 'static {
    /// The user repository type (the credential store)
    type UserRepo: UserRepository;

    /// Get the JWT manager
    fn jwt_manager(&self) -> &JwtManager;

    /// Get the credential store
    fn user_repo(&self) -> &Arc<Self::UserRepo>;
}
