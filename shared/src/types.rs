//! Common types used across the platform

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// GPS coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Human-readable label used when no place name is known
    pub fn label(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Supported locales
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        }
    }

    /// Parse a locale code, accepting a few common aliases
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" | "en-in" | "english" => Some(Locale::En),
            "hi" | "hi-in" | "hindi" | "हिन्दी" => Some(Locale::Hi),
            _ => None,
        }
    }

    /// Pick the string for this locale from a bilingual pair
    pub fn pick<'a>(&self, en: &'a str, hi: &'a str) -> &'a str {
        match self {
            Locale::En => en,
            Locale::Hi => hi,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Failure categories reported by the host location service
#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PositionError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("location request timed out")]
    Timeout,

    #[error("geolocation not supported")]
    Unsupported,
}

impl PositionError {
    /// Localized message shown to the user
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match self {
            PositionError::PermissionDenied => locale.pick(
                "Location access denied. Please enable location services, or tell me the name of your district or state.",
                "स्थान की अनुमति अस्वीकार कर दी गई। कृपया लोकेशन सेवाएं चालू करें, या अपने ज़िले या राज्य का नाम बताएं।",
            ),
            PositionError::PositionUnavailable => locale.pick(
                "Location information is unavailable right now. You can ask about a district or state by name instead.",
                "स्थान की जानकारी अभी उपलब्ध नहीं है। आप किसी ज़िले या राज्य के नाम से पूछ सकते हैं।",
            ),
            PositionError::Timeout => locale.pick(
                "The location request timed out. Please try again.",
                "स्थान अनुरोध का समय समाप्त हो गया। कृपया फिर से प्रयास करें।",
            ),
            PositionError::Unsupported => locale.pick(
                "Your device doesn't support location services. Tell me your district or state and I'll look it up.",
                "आपका डिवाइस लोकेशन सेवाओं का समर्थन नहीं करता। अपना ज़िला या राज्य बताएं, मैं जानकारी खोज दूंगा।",
            ),
        }
    }
}
