//! Handlers for the `/api/sensors` resource.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sensorhub_core::pagination::{Page, PageRequest};
use sensorhub_core::sensor::{Sensor, SensorId, SensorInput};

use crate::error::AppResult;
use crate::service::SensorDetail;
use crate::state::AppState;

/// Parse a path segment into a [`SensorId`]; malformed ids are a 400.
fn parse_id(raw: &str) -> AppResult<SensorId> {
    Ok(raw.parse::<SensorId>()?)
}

/// GET /api/sensors
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<PageRequest>, QueryRejection>,
) -> AppResult<Json<Page<Sensor>>> {
    let Query(page) = query?;
    let sensors = state.sensors.list(&page).await?;
    Ok(Json(sensors))
}

/// GET /api/sensors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Sensor>> {
    let sensor = state.sensors.get(parse_id(&id)?).await?;
    Ok(Json(sensor))
}

/// POST /api/sensors
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<SensorInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Sensor>)> {
    let Json(input) = body?;
    let sensor = state.sensors.create(input).await?;
    Ok((StatusCode::CREATED, Json(sensor)))
}

/// PUT /api/sensors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<SensorInput>, JsonRejection>,
) -> AppResult<Json<Sensor>> {
    let Json(input) = body?;
    let sensor = state.sensors.edit(parse_id(&id)?, input).await?;
    Ok(Json(sensor))
}

/// DELETE /api/sensors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.sensors.delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/sensors/{id}/enable
pub async fn enable(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.sensors.enable(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/sensors/{id}/enable
pub async fn disable(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.sensors.disable(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/sensors/{id}/detail
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SensorDetail>> {
    let detail = state.sensors.detail(parse_id(&id)?).await?;
    Ok(Json(detail))
}
