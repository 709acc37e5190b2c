//! Route definitions for the Jal-Mitra advisory service

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/readings", reading_routes())
        .nest("/sessions", session_routes())
        .route("/assistant/generate", post(handlers::generate))
}

/// Reading table routes
fn reading_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_readings))
        .route("/nearest", get(handlers::nearest_reading))
        .route("/by-name/:name", get(handlers::reading_by_name))
}

/// Conversation routes
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_session))
        .route("/:session_id", delete(handlers::end_session))
        .route("/:session_id/text", post(handlers::text_turn))
        .route("/:session_id/position", post(handlers::position_turn))
}
