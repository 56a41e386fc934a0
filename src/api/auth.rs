//! Registration and login handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::api::SuccessResponse;
use crate::domain::{LoginInput, RegisterInput, Role};
use crate::error::Result;
use crate::server::AppState;

/// Token response for successful logins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub status: u16,
    pub token: String,
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> Result<impl IntoResponse> {
    let user = state.auth_service.register(input).await?;
    if user.role == Role::Admin {
        tracing::info!(user_id = %user.id, "bootstrapped first admin user");
    }
    Ok((StatusCode::CREATED, Json(SuccessResponse::created(user))))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<impl IntoResponse> {
    let token = state.auth_service.login(input).await?;
    Ok(Json(TokenResponse { status: 200, token }))
}
