//! Intent models for free-text turns

use serde::{Deserialize, Serialize};

use crate::types::Locale;

/// Classified purpose of a user's text turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    Conservation,
    Crops,
    Status,
    Trend,
    FloodRisk,
    DataSource,
    Greeting,
    LocationRequest,
    Fallback,
}

impl IntentCategory {
    /// Categories whose answer depends on a known location
    pub fn needs_location(&self) -> bool {
        matches!(
            self,
            IntentCategory::Status | IntentCategory::Trend | IntentCategory::FloodRisk
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentCategory::Conservation => "conservation",
            IntentCategory::Crops => "crops",
            IntentCategory::Status => "status",
            IntentCategory::Trend => "trend",
            IntentCategory::FloodRisk => "flood_risk",
            IntentCategory::DataSource => "data_source",
            IntentCategory::Greeting => "greeting",
            IntentCategory::LocationRequest => "location_request",
            IntentCategory::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one text turn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedIntent {
    pub category: IntentCategory,
    /// Place phrase extracted from "... in X" / "... of X"
    pub place_name: Option<String>,
    /// Set when any trend/history/chart keyword appears, whatever the category
    pub trend_requested: bool,
    /// Hindi when the text contains Devanagari; overrides the session locale for one turn
    pub detected_locale: Option<Locale>,
}
