//! Restaurant handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::api::SuccessResponse;
use crate::domain::{CreateRestaurantInput, Role};
use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::policy;
use crate::server::AppState;

/// POST /Restaurant
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CreateRestaurantInput>,
) -> Result<impl IntoResponse> {
    policy::require_role(&user, &[Role::Admin])?;
    let restaurant = state.restaurant_service.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::created(restaurant)),
    ))
}

/// GET /Restaurant
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let restaurants = state.restaurant_service.list().await?;
    Ok(Json(SuccessResponse::ok(restaurants)))
}

/// GET /Restaurant/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let restaurant = state.restaurant_service.get(id).await?;
    Ok(Json(SuccessResponse::ok(restaurant)))
}
