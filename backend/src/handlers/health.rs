//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub readings: usize,
    pub active_sessions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generative_model: Option<String>,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        readings: state.store.len(),
        active_sessions: state.sessions.len().await,
        generative_model: state.gemini.as_ref().map(|g| g.model().to_string()),
    })
}
