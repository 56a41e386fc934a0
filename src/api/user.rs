//! User administration handlers

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::api::SuccessResponse;
use crate::domain::{ChangeRoleInput, Role};
use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::policy;
use crate::server::AppState;

/// GET /Users
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl IntoResponse> {
    policy::require_role(&user, &[Role::Admin])?;
    let users = state.user_service.list().await?;
    Ok(Json(SuccessResponse::ok(users)))
}

/// POST /Users/changeRole/{userId}
pub async fn change_role(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(user_id): Path<Uuid>,
    Json(input): Json<ChangeRoleInput>,
) -> Result<impl IntoResponse> {
    policy::require_role(&user, &[Role::Admin])?;
    let updated = state.user_service.change_role(user_id, input.role).await?;
    Ok(Json(SuccessResponse::ok(updated)))
}
