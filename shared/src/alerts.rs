//! Threshold-based alert generation

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Alert, AlertSeverity};

/// Scores below this are treated as critical depletion
pub const CRITICAL_SCORE_THRESHOLD: u8 = 35;

/// Scores below this (and at or above the critical threshold) are moderate risk
pub const WARNING_SCORE_THRESHOLD: u8 = 60;

struct AlertTemplate {
    severity: AlertSeverity,
    message: &'static str,
    message_hi: &'static str,
}

const CRITICAL_BAND: &[AlertTemplate] = &[
    AlertTemplate {
        severity: AlertSeverity::Critical,
        message: "Critical groundwater depletion detected. Immediate conservation measures recommended.",
        message_hi: "भूजल में गंभीर कमी पाई गई है। तुरंत संरक्षण उपाय अपनाने की सलाह दी जाती है।",
    },
    AlertTemplate {
        severity: AlertSeverity::Warning,
        message: "Consider implementing rainwater harvesting and reducing pumping hours.",
        message_hi: "वर्षा जल संचयन अपनाएं और पंप चलाने के घंटे कम करें।",
    },
];

const WARNING_BAND: &[AlertTemplate] = &[
    AlertTemplate {
        severity: AlertSeverity::Warning,
        message: "Moderate risk detected. Monitor well levels closely and implement water-saving practices.",
        message_hi: "मध्यम जोखिम पाया गया है। कुओं के स्तर पर नज़र रखें और पानी बचाने के तरीके अपनाएं।",
    },
    AlertTemplate {
        severity: AlertSeverity::Info,
        message: "Seasonal variation normal. Continue monitoring during dry season.",
        message_hi: "मौसमी उतार-चढ़ाव सामान्य है। सूखे मौसम में निगरानी जारी रखें।",
    },
];

const STABLE_BAND: &[AlertTemplate] = &[AlertTemplate {
    severity: AlertSeverity::Info,
    message: "Groundwater levels are stable. Maintain current conservation practices.",
    message_hi: "भूजल स्तर स्थिर है। वर्तमान संरक्षण प्रथाओं को बनाए रखें।",
}];

/// Alerts for a health score, in display order
///
/// Each call produces a complete list with fresh ids; callers replace any
/// list they showed before.
pub fn generate_alerts(score: u8, now: DateTime<Utc>) -> Vec<Alert> {
    let band = if score < CRITICAL_SCORE_THRESHOLD {
        CRITICAL_BAND
    } else if score < WARNING_SCORE_THRESHOLD {
        WARNING_BAND
    } else {
        STABLE_BAND
    };

    band.iter()
        .map(|template| Alert {
            id: Uuid::new_v4(),
            message: template.message.to_string(),
            message_hi: template.message_hi.to_string(),
            severity: template.severity,
            timestamp: now,
        })
        .collect()
}
