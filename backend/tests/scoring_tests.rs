//! Tests for health scoring and alert generation
//! Verifies score bounds, status ceilings and alert bands

use chrono::Utc;
use proptest::prelude::*;
use shared::{compute_score, generate_alerts, AlertSeverity, ScoreBand, WaterStatus};

fn status_strategy() -> impl Strategy<Value = WaterStatus> {
    prop::sample::select(WaterStatus::ALL.to_vec())
}

// ============================================================================
// Unit Tests
// ============================================================================

mod health_score {
    use super::*;

    #[test]
    fn worked_examples() {
        assert_eq!(compute_score(12.0, WaterStatus::Critical), 30);
        assert_eq!(compute_score(35.2, WaterStatus::Good), 88);
        assert_eq!(compute_score(0.0, WaterStatus::Good), 0);
    }

    #[test]
    fn rounding_is_half_up() {
        // 0.2 m -> 0.5 -> 1
        assert_eq!(compute_score(0.2, WaterStatus::Good), 1);
        // 0.18 m -> 0.45 -> 0
        assert_eq!(compute_score(0.18, WaterStatus::Good), 0);
    }

    #[test]
    fn bands_for_display() {
        assert_eq!(ScoreBand::for_score(compute_score(35.2, WaterStatus::Good)), ScoreBand::Good);
        assert_eq!(
            ScoreBand::for_score(compute_score(22.5, WaterStatus::Moderate)),
            ScoreBand::ModerateRisk
        );
        assert_eq!(ScoreBand::for_score(compute_score(12.0, WaterStatus::Critical)), ScoreBand::HighRisk);
    }
}

mod alert_bands {
    use super::*;

    fn severities(score: u8) -> Vec<AlertSeverity> {
        generate_alerts(score, Utc::now()).iter().map(|a| a.severity).collect()
    }

    #[test]
    fn critical_band() {
        assert_eq!(severities(20), vec![AlertSeverity::Critical, AlertSeverity::Warning]);
    }

    #[test]
    fn warning_band() {
        assert_eq!(severities(50), vec![AlertSeverity::Warning, AlertSeverity::Info]);
    }

    #[test]
    fn stable_band() {
        assert_eq!(severities(75), vec![AlertSeverity::Info]);
    }

    #[test]
    fn every_alert_is_bilingual() {
        for score in [0u8, 34, 35, 59, 60, 100] {
            for alert in generate_alerts(score, Utc::now()) {
                assert!(!alert.message.is_empty());
                assert!(!alert.message_hi.is_empty());
            }
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Scores never exceed the status ceiling
        #[test]
        fn prop_score_within_ceiling(level in -50.0f64..200.0, status in status_strategy()) {
            let score = compute_score(level, status);
            prop_assert!(score <= 100);
            prop_assert!(score <= status.score_ceiling());
        }

        /// Deeper water never lowers the score
        #[test]
        fn prop_score_monotone_in_level(
            a in 0.0f64..60.0,
            b in 0.0f64..60.0,
            status in status_strategy()
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(compute_score(low, status) <= compute_score(high, status));
        }

        /// Every score yields a non-empty alert list ordered by severity band
        #[test]
        fn prop_alert_band_matches_score(score in 0u8..=100) {
            let alerts = generate_alerts(score, Utc::now());
            let first = alerts[0].severity;
            if score < 35 {
                prop_assert_eq!(first, AlertSeverity::Critical);
                prop_assert_eq!(alerts.len(), 2);
            } else if score < 60 {
                prop_assert_eq!(first, AlertSeverity::Warning);
                prop_assert_eq!(alerts.len(), 2);
            } else {
                prop_assert_eq!(first, AlertSeverity::Info);
                prop_assert_eq!(alerts.len(), 1);
            }
        }
    }
}
