//! Per-conversation session state

use serde::{Deserialize, Serialize};

use crate::models::ResolvedMatch;
use crate::types::Locale;

/// Conversation context owned by the advisory pipeline
///
/// Created empty at conversation start and mutated only by
/// [`crate::pipeline::AdvisoryPipeline`]. Never shared between conversations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub last_resolved_match: Option<ResolvedMatch>,
    pub locale: Locale,
    /// Catalog index of the previous greeting, to avoid repeating it
    pub last_greeting: Option<usize>,
}

/// Location state of a session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocationState {
    NoLocation,
    LocationResolved,
}

impl Session {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    pub fn state(&self) -> LocationState {
        match self.last_resolved_match {
            Some(_) => LocationState::LocationResolved,
            None => LocationState::NoLocation,
        }
    }

    /// Record a successful coordinate or name resolution
    pub(crate) fn resolve(&mut self, matched: ResolvedMatch) {
        self.last_resolved_match = Some(matched);
    }

    /// Forget the known location after a failed name lookup
    pub(crate) fn reset_location(&mut self) {
        self.last_resolved_match = None;
    }
}
