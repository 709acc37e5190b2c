//! Groundwater monitoring reading models

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::{GpsCoordinates, Locale};

/// One monitoring record: location, depth to water and categorical status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    pub state: String,
    pub district: String,
    pub block: String,
    pub lat: f64,
    pub lon: f64,
    /// Depth to the water table in metres below ground
    pub level_m: f64,
    pub status: WaterStatus,
}

impl Reading {
    pub fn coordinates(&self) -> GpsCoordinates {
        GpsCoordinates::new(self.lat, self.lon)
    }

    /// "District, State" label used in answers
    pub fn place_label(&self) -> String {
        format!("{}, {}", self.district, self.state)
    }
}

/// Status band recorded with each reading
///
/// The band is authoritative input data. It also acts as the ceiling applied
/// by the health scorer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WaterStatus {
    Critical,
    Warning,
    Moderate,
    Good,
}

impl WaterStatus {
    pub const ALL: [WaterStatus; 4] = [
        WaterStatus::Critical,
        WaterStatus::Warning,
        WaterStatus::Moderate,
        WaterStatus::Good,
    ];

    /// Translated status name
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (WaterStatus::Critical, Locale::En) => "Critical",
            (WaterStatus::Critical, Locale::Hi) => "गंभीर",
            (WaterStatus::Warning, Locale::En) => "Warning",
            (WaterStatus::Warning, Locale::Hi) => "चेतावनी",
            (WaterStatus::Moderate, Locale::En) => "Moderate",
            (WaterStatus::Moderate, Locale::Hi) => "मध्यम",
            (WaterStatus::Good, Locale::En) => "Good",
            (WaterStatus::Good, Locale::Hi) => "अच्छा",
        }
    }

    /// Upper bound a score may reach for this band
    pub fn score_ceiling(&self) -> u8 {
        match self {
            WaterStatus::Critical => 30,
            WaterStatus::Warning => 60,
            WaterStatus::Moderate => 80,
            WaterStatus::Good => 100,
        }
    }
}

impl std::fmt::Display for WaterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(Locale::En))
    }
}

impl FromStr for WaterStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(WaterStatus::Critical),
            "warning" => Ok(WaterStatus::Warning),
            "moderate" => Ok(WaterStatus::Moderate),
            "good" => Ok(WaterStatus::Good),
            other => Err(format!("Unknown water status: {}", other)),
        }
    }
}

/// A reading resolved for a query, with its distance from the query point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMatch {
    pub reading: Reading,
    /// Great-circle distance in km; zero for exact name or coordinate matches
    pub distance_km: f64,
}

impl ResolvedMatch {
    /// Match produced by an exact name lookup
    pub fn exact(reading: Reading) -> Self {
        Self {
            reading,
            distance_km: 0.0,
        }
    }
}
