//! Rule-based intent classification
//!
//! Rules are an explicit ordered list of `(predicate, category)` pairs. The
//! first rule whose predicate matches decides the category, so a message
//! mentioning both conservation and crops is always `conservation`.

use crate::models::{ClassifiedIntent, IntentCategory};
use crate::types::Locale;

// ============================================================================
// Keyword Tables
// ============================================================================

const CONSERVATION_KEYWORDS: &[&str] = &[
    "conserv", "save water", "saving", "manag", "rainwater", "recharge", "reuse", "संरक्षण", "बचत",
    "बचा",
];

const CROP_KEYWORDS: &[&str] = &[
    "crop", "farm", "agricultur", "irrigat", "cultivat", "फसल", "खेती", "किसान", "सिंचाई",
];

const STATUS_KEYWORDS: &[&str] = &[
    "level", "depth", "deep", "monitor", "current", "status", "स्तर", "गहराई", "स्थिति",
];

const TREND_KEYWORDS: &[&str] = &[
    "predict", "forecast", "trend", "histor", "chart", "graph", "पूर्वानुमान", "रुझान", "इतिहास",
    "चार्ट",
];

const FLOOD_RISK_KEYWORDS: &[&str] = &["flood", "danger", "risk", "बाढ़", "खतरा", "जोखिम"];

const DATA_SOURCE_KEYWORDS: &[&str] = &["data", "accura", "source", "डेटा", "स्रोत", "सटीक"];

/// Whole-word greeting tokens, Latin and Devanagari
const GREETING_TOKENS: &[&str] = &[
    "hello", "hi", "hii", "hey", "greetings", "namaste", "namaskar", "नमस्ते", "नमस्कार",
];

/// Leading words that mark a captured phrase as deictic rather than a place
const NON_PLACE_LEADS: &[&str] = &["my", "your", "our", "this", "that", "here", "there"];

const PLACE_PREPOSITIONS: &[&str] = &["in", "of"];

// ============================================================================
// Rules
// ============================================================================

/// Normalized view of one message, shared by every rule
pub struct TurnText<'a> {
    original: &'a str,
    lowered: String,
}

impl<'a> TurnText<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            original: text,
            lowered: text.to_lowercase(),
        }
    }

    fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.lowered.contains(k))
    }

    fn has_token(&self, tokens: &[&str]) -> bool {
        self.lowered
            .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation() || c == '।')
            .any(|word| tokens.contains(&word))
    }
}

/// One classification rule
pub struct IntentRule {
    pub category: IntentCategory,
    pub matches: fn(&TurnText<'_>) -> bool,
}

/// Rules in priority order; `fallback` applies when none match
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        category: IntentCategory::Conservation,
        matches: |t| t.contains_any(CONSERVATION_KEYWORDS),
    },
    IntentRule {
        category: IntentCategory::Crops,
        matches: |t| t.contains_any(CROP_KEYWORDS),
    },
    IntentRule {
        category: IntentCategory::Status,
        matches: |t| t.contains_any(STATUS_KEYWORDS),
    },
    IntentRule {
        category: IntentCategory::Trend,
        matches: |t| t.contains_any(TREND_KEYWORDS),
    },
    IntentRule {
        category: IntentCategory::FloodRisk,
        matches: |t| t.contains_any(FLOOD_RISK_KEYWORDS),
    },
    IntentRule {
        category: IntentCategory::DataSource,
        matches: |t| t.contains_any(DATA_SOURCE_KEYWORDS),
    },
    IntentRule {
        category: IntentCategory::Greeting,
        matches: |t| t.has_token(GREETING_TOKENS),
    },
];

// ============================================================================
// Classification
// ============================================================================

/// Classify a free-text turn and extract its slots
pub fn classify(text: &str) -> ClassifiedIntent {
    let turn = TurnText::new(text);

    let category = INTENT_RULES
        .iter()
        .find(|rule| (rule.matches)(&turn))
        .map(|rule| rule.category)
        .unwrap_or(IntentCategory::Fallback);

    ClassifiedIntent {
        category,
        place_name: extract_place_name(turn.original),
        trend_requested: turn.contains_any(TREND_KEYWORDS),
        detected_locale: detect_locale(turn.original),
    }
}

/// Hindi when any character falls in the Devanagari block
pub fn detect_locale(text: &str) -> Option<Locale> {
    text.chars()
        .any(|c| ('\u{0900}'..='\u{097F}').contains(&c))
        .then_some(Locale::Hi)
}

/// Trailing phrase after the last word "in" or "of"
///
/// "What is the trend in Pune?" yields `Pune`. Phrases such as "my area"
/// are not place names and yield `None`.
pub fn extract_place_name(text: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets aligned with the original text
    let lowered = text.to_ascii_lowercase();
    let haystack = lowered.as_str();

    let start = PLACE_PREPOSITIONS
        .iter()
        .flat_map(move |prep| {
            haystack
                .match_indices(*prep)
                .filter(move |(i, m)| is_word_at(haystack, *i, m.len()))
                .map(|(i, m)| i + m.len())
        })
        .max()?;

    let phrase = text[start..]
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_punctuation() || c == '।')
        .trim();
    if phrase.is_empty() {
        return None;
    }

    let lead = phrase.split_whitespace().next().unwrap_or_default().to_lowercase();
    if NON_PLACE_LEADS.contains(&lead.as_str()) {
        return None;
    }

    Some(phrase.to_string())
}

/// A preposition counts only as a whole word followed by whitespace
fn is_word_at(text: &str, index: usize, len: usize) -> bool {
    let before_ok = text[..index]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace);
    let after_ok = text[index + len..]
        .chars()
        .next()
        .is_some_and(char::is_whitespace);
    before_ok && after_ok
}
