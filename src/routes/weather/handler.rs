use axum::{
    Json,
    extract::{Path, Query, State},
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::Value;

use crate::AppState;
use crate::error::AppError;
use crate::weather::{CurrentWeather, parse_days};

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub days: Option<String>,
}

#[axum::debug_handler]
pub async fn current_weather(
    State(state): State<AppState>,
    WithRejection(Path(location_id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<CurrentWeather>, AppError> {
    let location = state.find_location(location_id).await?;
    let current = state
        .weather
        .current(location.latitude, location.longitude)
        .await?;

    Ok(Json(current))
}

#[axum::debug_handler]
pub async fn history(
    State(state): State<AppState>,
    WithRejection(Path(location_id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Query(query), _): WithRejection<Query<HistoryQuery>, AppError>,
) -> Result<Json<Value>, AppError> {
    let location = state.find_location(location_id).await?;
    let days = parse_days(query.days.as_deref())?;

    let data = state.history.get_history(&location, days).await?;
    Ok(Json(data))
}
