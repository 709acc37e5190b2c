//! HTTP handlers for advisory conversations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::TurnEvent;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::models::{
    CreateSessionInput, PositionTurnInput, SessionCreated, TextTurnInput, TurnResponse,
};
use crate::services::AdvisoryService;
use crate::AppState;

/// Start a conversation
pub async fn create_session(
    State(state): State<AppState>,
    input: Option<Json<CreateSessionInput>>,
) -> (StatusCode, Json<SessionCreated>) {
    let input = input.map(|Json(i)| i).unwrap_or_default();
    let service = AdvisoryService::new(&state);
    let created = service.start_session(input.locale.as_deref()).await;
    (StatusCode::CREATED, Json(created))
}

/// End a conversation and discard its state
pub async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = AdvisoryService::new(&state);
    service.end_session(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Text turn
pub async fn text_turn(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<TextTurnInput>,
) -> AppResult<Json<TurnResponse>> {
    input.validate()?;
    let service = AdvisoryService::new(&state);
    let turn = service
        .handle_turn(session_id, TurnEvent::Text { text: input.text })
        .await?;
    Ok(Json(turn))
}

/// Position turn, or a report that no position could be obtained
pub async fn position_turn(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<PositionTurnInput>,
) -> AppResult<Json<TurnResponse>> {
    input.validate()?;
    let event = input.into_event()?;
    let service = AdvisoryService::new(&state);
    let turn = service.handle_turn(session_id, event).await?;
    Ok(Json(turn))
}
