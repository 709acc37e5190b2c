//! HTTP handlers for the reading table

use axum::{
    extract::{Path, Query, State},
    Json,
};
use shared::{validate_coordinates, validate_place_name, Reading, ResolvedMatch};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{NearestQuery, ScoredMatch};
use crate::AppState;

/// List the reading table in store order
pub async fn list_readings(State(state): State<AppState>) -> Json<Vec<Reading>> {
    Json(state.store.readings().to_vec())
}

/// Reading nearest to a coordinate
pub async fn nearest_reading(
    State(state): State<AppState>,
    Query(query): Query<NearestQuery>,
) -> AppResult<Json<ScoredMatch>> {
    query.validate()?;
    validate_coordinates(query.latitude, query.longitude)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    let matched = state
        .store
        .find_nearest(query.latitude, query.longitude)
        .ok_or_else(|| AppError::NotFound("Reading".to_string()))?;
    Ok(Json(matched.into()))
}

/// Exact district or state lookup
pub async fn reading_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<ScoredMatch>> {
    validate_place_name(&name).map_err(|e| AppError::Validation {
        field: "name".to_string(),
        message: e.to_string(),
        message_hi: "अमान्य स्थान नाम".to_string(),
    })?;
    let reading = state
        .store
        .find_by_name(&name)
        .ok_or_else(|| AppError::NotFound(format!("Reading for {}", name)))?;
    Ok(Json(ResolvedMatch::exact(reading.clone()).into()))
}
