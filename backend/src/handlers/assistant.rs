//! HTTP handler for the generative assistant

use axum::{extract::State, Json};
use validator::Validate;

use crate::error::AppResult;
use crate::models::{GenerateInput, GenerateOutput};
use crate::services::AdvisoryService;
use crate::AppState;

/// Forward a free-form question to the generative provider
pub async fn generate(
    State(state): State<AppState>,
    Json(input): Json<GenerateInput>,
) -> AppResult<Json<GenerateOutput>> {
    input.validate()?;
    let service = AdvisoryService::new(&state);
    let text = service.generate(&input.prompt).await?;
    Ok(Json(GenerateOutput { text }))
}
