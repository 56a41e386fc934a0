//! Order handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::api::SuccessResponse;
use crate::domain::{CreateOrderInput, Role, UpdateOrderStatusInput};
use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::policy;
use crate::server::AppState;

/// POST /Order/{dishId}
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(dish_id): Path<Uuid>,
    Json(input): Json<CreateOrderInput>,
) -> Result<impl IntoResponse> {
    policy::require_role(&user, &[Role::Customer])?;
    let order = state.order_service.create(&user, dish_id, input).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::created(order))))
}

/// POST /Order/status/{orderId}
pub async fn change_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(order_id): Path<Uuid>,
    Json(input): Json<UpdateOrderStatusInput>,
) -> Result<impl IntoResponse> {
    policy::require_role(&user, &[Role::Chef, Role::Admin])?;
    let order = state
        .order_service
        .change_status(order_id, input.status)
        .await?;
    Ok(Json(SuccessResponse::ok(order)))
}

/// GET /Order
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl IntoResponse> {
    policy::require_role(&user, &[Role::Customer, Role::Chef, Role::Admin])?;
    let orders = state.order_service.list_for(&user).await?;
    Ok(Json(SuccessResponse::ok(orders)))
}

/// GET /Order/{orderId}
pub async fn get(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(order_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let order = state.order_service.get_for(&user, order_id).await?;
    Ok(Json(SuccessResponse::ok(order)))
}
