use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use crate::AppState;
use crate::database::LocationEntity;
use crate::error::AppError;

use super::model::{CreateLocationRequest, UpdateLocationRequest};

#[axum::debug_handler]
pub async fn create_location(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<CreateLocationRequest>, AppError>,
) -> Result<Json<LocationEntity>, AppError> {
    let location = state
        .locations
        .create(&req.name, req.latitude, req.longitude)
        .await?;
    tracing::info!("Created location {} ({})", location.id, location.name);

    Ok(Json(location))
}

#[axum::debug_handler]
pub async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocationEntity>>, AppError> {
    Ok(Json(state.locations.find_all().await?))
}

#[axum::debug_handler]
pub async fn get_location(
    State(state): State<AppState>,
    WithRejection(Path(location_id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<LocationEntity>, AppError> {
    let location = state.find_location(location_id).await?;
    Ok(Json(location))
}

#[axum::debug_handler]
pub async fn update_location(
    State(state): State<AppState>,
    WithRejection(Path(location_id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateLocationRequest>, AppError>,
) -> Result<Json<LocationEntity>, AppError> {
    let location = state
        .locations
        .update(location_id, req.into())
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(location))
}

#[axum::debug_handler]
pub async fn delete_location(
    State(state): State<AppState>,
    WithRejection(Path(location_id), _): WithRejection<Path<i64>, AppError>,
) -> Result<StatusCode, AppError> {
    if !state.locations.delete(location_id).await? {
        return Err(AppError::NotFound);
    }
    // 已缓存的历史数据不随之失效，按 TTL 自然过期
    tracing::info!("Deleted location {}", location_id);

    Ok(StatusCode::NO_CONTENT)
}
