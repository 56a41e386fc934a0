//! Dish handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::api::SuccessResponse;
use crate::domain::{CreateDishInput, Role};
use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::policy;
use crate::server::AppState;

/// POST /Dish/{chefId}
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(chef_id): Path<Uuid>,
    Json(input): Json<CreateDishInput>,
) -> Result<impl IntoResponse> {
    policy::require_role(&user, &[Role::Chef, Role::Admin])?;
    let dish = state.dish_service.create(chef_id, input).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::created(dish))))
}

/// GET /Dish
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let dishes = state.dish_service.list().await?;
    Ok(Json(SuccessResponse::ok(dishes)))
}

/// GET /Dish/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let dish = state.dish_service.get(id).await?;
    Ok(Json(SuccessResponse::ok(dish)))
}
