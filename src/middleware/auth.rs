//! Authentication extractor
//!
//! Stage 1 of the request gate: extract the bearer token, verify it, and
//! resolve the claimed subject against the credential store. The resolved
//! user rides along on the request for downstream role checks.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::domain::User;
use crate::error::AppError;
use crate::repository::UserRepository;
use crate::state::HasAuth;

/// The authenticated user resolved from the request's bearer token.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Extract the Bearer token from the Authorization header
fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::Unauthenticated("Please login".to_string()))?
        .to_str()
        .map_err(|_| AppError::Unauthenticated("Invalid authorization header".to_string()))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| {
            AppError::Unauthenticated("Authorization header must use Bearer scheme".to_string())
        })
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: HasAuth,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;
        let claims = state.jwt_manager().verify(token)?;

        let user = state
            .user_repo()
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| AppError::IdentityNotFound("User does not exist".to_string()))?;

        Ok(CurrentUser(user))
    }
}
