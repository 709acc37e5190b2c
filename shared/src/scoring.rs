//! Groundwater health scoring

use serde::{Deserialize, Serialize};

use crate::models::{Reading, WaterStatus};
use crate::types::Locale;

/// Depth that maps to a full base score
pub const FULL_SCORE_DEPTH_M: f64 = 40.0;

/// Score a reading on a 0-100 scale
///
/// The depth gives a base score (`level_m / 40 * 100`, clamped and rounded),
/// which is then capped by the reading's status band. Non-finite depths
/// score 0.
pub fn compute_score(level_m: f64, status: WaterStatus) -> u8 {
    if !level_m.is_finite() {
        return 0;
    }
    let base = (level_m / FULL_SCORE_DEPTH_M * 100.0).clamp(0.0, 100.0).round() as u8;
    base.min(status.score_ceiling())
}

/// Score of a reading, always derived from its own depth and status
pub fn score_reading(reading: &Reading) -> u8 {
    compute_score(reading.level_m, reading.status)
}

/// Display band for a score, as shown next to the health gauge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Good,
    ModerateRisk,
    HighRisk,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => ScoreBand::Good,
            40..=69 => ScoreBand::ModerateRisk,
            _ => ScoreBand::HighRisk,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match self {
            ScoreBand::Good => locale.pick("Good", "अच्छा"),
            ScoreBand::ModerateRisk => locale.pick("Moderate Risk", "मध्यम जोखिम"),
            ScoreBand::HighRisk => locale.pick("High Risk", "उच्च जोखिम"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_examples() {
        assert_eq!(compute_score(12.0, WaterStatus::Critical), 30);
        assert_eq!(compute_score(35.2, WaterStatus::Good), 88);
        assert_eq!(compute_score(0.0, WaterStatus::Good), 0);
    }

    #[test]
    fn test_zero_depth_scores_zero_for_every_status() {
        for status in WaterStatus::ALL {
            assert_eq!(compute_score(0.0, status), 0);
        }
    }

    #[test]
    fn test_status_ceilings() {
        assert_eq!(compute_score(40.0, WaterStatus::Critical), 30);
        assert_eq!(compute_score(40.0, WaterStatus::Warning), 60);
        assert_eq!(compute_score(40.0, WaterStatus::Moderate), 80);
        assert_eq!(compute_score(40.0, WaterStatus::Good), 100);
    }

    #[test]
    fn test_base_is_clamped() {
        assert_eq!(compute_score(120.0, WaterStatus::Good), 100);
        assert_eq!(compute_score(-5.0, WaterStatus::Good), 0);
        assert_eq!(compute_score(f64::NAN, WaterStatus::Good), 0);
    }

    #[test]
    fn test_status_is_not_recomputed_from_depth() {
        // A deep reading labelled Critical stays capped by its label
        assert_eq!(compute_score(38.0, WaterStatus::Critical), 30);
        // A shallow reading labelled Good is not lifted by its label
        assert_eq!(compute_score(4.0, WaterStatus::Good), 10);
    }

    #[test]
    fn test_score_band() {
        assert_eq!(ScoreBand::for_score(88), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(70), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(69), ScoreBand::ModerateRisk);
        assert_eq!(ScoreBand::for_score(40), ScoreBand::ModerateRisk);
        assert_eq!(ScoreBand::for_score(39), ScoreBand::HighRisk);
    }
}
