//! Menu handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::api::SuccessResponse;
use crate::domain::{CreateMenuInput, Role};
use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::policy;
use crate::server::AppState;

/// POST /Menu/{restoId}
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(restaurant_id): Path<Uuid>,
    Json(input): Json<CreateMenuInput>,
) -> Result<impl IntoResponse> {
    policy::require_role(&user, &[Role::Admin])?;
    let menu = state.menu_service.create(restaurant_id, input).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::created(menu))))
}

/// POST /Menu/{menuId}/{dishId}
pub async fn attach_dish(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((menu_id, dish_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse> {
    policy::require_role(&user, &[Role::Admin])?;
    let menu = state.menu_service.attach_dish(menu_id, dish_id).await?;
    Ok(Json(SuccessResponse::ok(menu)))
}

/// GET /Menu
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let menus = state.menu_service.list().await?;
    Ok(Json(SuccessResponse::ok(menus)))
}

/// GET /Menu/{menuId}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let menu = state.menu_service.get(id).await?;
    Ok(Json(SuccessResponse::ok(menu)))
}
