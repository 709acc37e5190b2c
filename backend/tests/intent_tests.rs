//! Tests for rule-based intent classification
//! Verifies rule priority, slot extraction and totality

use proptest::prelude::*;
use shared::intent::{extract_place_name, INTENT_RULES};
use shared::{classify, IntentCategory, Locale};

// ============================================================================
// Unit Tests
// ============================================================================

mod categories {
    use super::*;

    #[test]
    fn conservation_beats_crops() {
        let intent = classify("How can I conserve water for my crops?");
        assert_eq!(intent.category, IntentCategory::Conservation);
        assert_eq!(intent.place_name, None);
    }

    #[test]
    fn rule_order_is_fixed() {
        let order: Vec<IntentCategory> = INTENT_RULES.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                IntentCategory::Conservation,
                IntentCategory::Crops,
                IntentCategory::Status,
                IntentCategory::Trend,
                IntentCategory::FloodRisk,
                IntentCategory::DataSource,
                IntentCategory::Greeting,
            ]
        );
    }

    #[test]
    fn keyword_rules_never_request_location() {
        for text in ["", "share location", "where am I", "my location please"] {
            assert_ne!(classify(text).category, IntentCategory::LocationRequest);
        }
    }

    #[test]
    fn hindi_greeting_sets_locale() {
        let intent = classify("नमस्ते");
        assert_eq!(intent.category, IntentCategory::Greeting);
        assert_eq!(intent.detected_locale, Some(Locale::Hi));
    }
}

mod slots {
    use super::*;

    #[test]
    fn trend_in_pune() {
        let intent = classify("trend in Pune");
        assert_eq!(intent.place_name.as_deref(), Some("Pune"));
        assert!(intent.trend_requested);
        assert_eq!(intent.detected_locale, None);
    }

    #[test]
    fn trailing_punctuation_is_trimmed() {
        assert_eq!(extract_place_name("status in Mysuru?!").as_deref(), Some("Mysuru"));
        assert_eq!(extract_place_name("level of Uttar Pradesh.").as_deref(), Some("Uttar Pradesh"));
    }

    #[test]
    fn empty_capture_is_ignored() {
        assert_eq!(extract_place_name("status in ?"), None);
        assert_eq!(extract_place_name("status in   "), None);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Classification is total over arbitrary input
        #[test]
        fn prop_classify_never_panics(text in "\\PC{0,120}") {
            let intent = classify(&text);
            prop_assert_ne!(intent.category, IntentCategory::LocationRequest);
            if let Some(place) = intent.place_name {
                prop_assert!(!place.is_empty());
                prop_assert_eq!(place.trim(), place.as_str());
            }
        }

        /// A "status in <name>" message always captures the name
        #[test]
        fn prop_place_captured(name in "[A-Z][a-z]{2,12}( [A-Z][a-z]{2,12})?") {
            let lead = name.split(' ').next().unwrap_or_default().to_lowercase();
            prop_assume!(!["this", "that", "here", "there", "your", "our"].contains(&lead.as_str()));
            let text = format!("What is the status in {}?", name);
            prop_assert_eq!(extract_place_name(&text), Some(name));
        }

        /// The trend flag follows trend keywords regardless of category
        #[test]
        fn prop_trend_flag(prefix in "(conserve|crops|level|flood)", place in "[A-Z][a-z]{3,8}") {
            let intent = classify(&format!("{} history in {}", prefix, place));
            prop_assert!(intent.trend_requested);
        }
    }
}
