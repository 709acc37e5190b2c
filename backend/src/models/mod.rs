//! Request and response models for the HTTP API
//!
//! Re-exports models from the shared crate and adds backend-specific models

pub use shared::models::*;

use serde::{Deserialize, Serialize};
use shared::{
    score_reading, validate_coordinates, GpsCoordinates, Locale, PositionError, ScoreBand,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

// ============================================================================
// Readings
// ============================================================================

/// Query for the nearest reading
#[derive(Debug, Deserialize, Validate)]
pub struct NearestQuery {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: f64,
}

/// A resolved reading with its derived score
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMatch {
    #[serde(flatten)]
    pub matched: ResolvedMatch,
    pub score: u8,
    pub band: ScoreBand,
}

impl From<ResolvedMatch> for ScoredMatch {
    fn from(matched: ResolvedMatch) -> Self {
        let score = score_reading(&matched.reading);
        Self {
            matched,
            score,
            band: ScoreBand::for_score(score),
        }
    }
}

// ============================================================================
// Sessions
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionInput {
    /// Locale code such as `en` or `hi`
    pub locale: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreated {
    pub session_id: Uuid,
    pub locale: Locale,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TextTurnInput {
    #[validate(length(max = 1000, message = "Message must be at most 1000 characters"))]
    pub text: String,
}

/// Position turn: coordinates, or the reason none could be obtained
#[derive(Debug, Deserialize, Validate)]
pub struct PositionTurnInput {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,
    pub error: Option<PositionError>,
}

impl PositionTurnInput {
    pub fn into_event(self) -> AppResult<TurnEvent> {
        if let Some(error) = self.error {
            return Ok(TurnEvent::PositionFailed { error });
        }
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => {
                validate_coordinates(latitude, longitude)
                    .map_err(|e| AppError::ValidationError(e.to_string()))?;
                Ok(TurnEvent::Position {
                    coordinates: GpsCoordinates::new(latitude, longitude),
                })
            }
            _ => Err(AppError::ValidationError(
                "Either latitude and longitude or error is required".to_string(),
            )),
        }
    }
}

/// Pipeline output plus the generative fallback outcome
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub response: AdvisoryResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_error: Option<String>,
    /// For position turns, whether the point lies inside the area the
    /// reading table covers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_coverage_area: Option<bool>,
}

// ============================================================================
// Assistant
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateInput {
    #[validate(length(min = 1, max = 4000, message = "Prompt must be 1 to 4000 characters"))]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub text: String,
}
