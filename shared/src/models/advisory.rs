//! Turn inputs and pipeline output

use serde::{Deserialize, Serialize};

use crate::models::{Alert, IntentCategory, ResolvedMatch};
use crate::types::{GpsCoordinates, Locale, PositionError};

/// One conversational turn delivered to the pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnEvent {
    /// Device position obtained from the host
    Position { coordinates: GpsCoordinates },
    /// The host could not obtain a position
    PositionFailed { error: PositionError },
    /// Free-form user text
    Text { text: String },
}

/// One point of the synthetic trend series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub year_label: String,
    pub level: f64,
}

/// Everything the presentation layer needs to render one turn
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryResponse {
    pub text: String,
    pub locale_used: Locale,
    pub intent: IntentCategory,
    /// Session location after this turn
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub matched: Option<ResolvedMatch>,
    /// Health score of `matched`, always recomputed from it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    /// Replaces any previously shown alerts
    pub alerts: Vec<Alert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_series: Option<Vec<TrendPoint>>,
}
