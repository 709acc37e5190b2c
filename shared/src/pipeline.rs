//! Per-turn orchestration of the advisory pipeline
//!
//! The pipeline owns no state of its own. Everything that survives between
//! turns lives in the [`Session`] passed in by the caller, which makes the
//! location state machine explicit:
//!
//! - a successful coordinate or name resolution moves the session to
//!   `LocationResolved`, overwriting any previous match
//! - a named place that cannot be resolved moves it back to `NoLocation`
//! - every other turn leaves it unchanged

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

use crate::alerts::generate_alerts;
use crate::compose::{compose, ComposeRequest};
use crate::intent::classify;
use crate::models::{
    AdvisoryResponse, IntentCategory, ResolvedMatch, Session, TrendPoint, TurnEvent,
};
use crate::scoring::score_reading;
use crate::store::ReadingStore;
use crate::types::{GpsCoordinates, PositionError};

/// Sequences resolution, scoring, alerting and composition for one turn
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryPipeline<'a> {
    store: &'a ReadingStore,
}

impl<'a> AdvisoryPipeline<'a> {
    pub fn new(store: &'a ReadingStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a ReadingStore {
        self.store
    }

    /// Handle one turn and update the session
    pub fn handle<R: Rng + ?Sized>(
        &self,
        session: &mut Session,
        event: &TurnEvent,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> AdvisoryResponse {
        match event {
            TurnEvent::Position { coordinates } => {
                self.handle_position(session, *coordinates, rng, now)
            }
            TurnEvent::PositionFailed { error } => self.handle_position_error(session, *error, now),
            TurnEvent::Text { text } => self.handle_text(session, text, rng, now),
        }
    }

    fn handle_position<R: Rng + ?Sized>(
        &self,
        session: &mut Session,
        coordinates: GpsCoordinates,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> AdvisoryResponse {
        let resolved = self
            .store
            .find_nearest(coordinates.latitude, coordinates.longitude);
        if let Some(matched) = &resolved {
            session.resolve(matched.clone());
        }

        // Only an empty store fails to resolve a coordinate
        let place = coordinates.label();
        let request = ComposeRequest {
            category: IntentCategory::Status,
            focus: resolved.as_ref(),
            trend_anchor: None,
            unresolved_place: resolved.is_none().then_some(place.as_str()),
            locale: session.locale,
            trend_requested: false,
            previous_greeting: session.last_greeting,
            current_year: now.year(),
        };
        let composition = compose(&request, rng);

        respond(session, composition.text, IntentCategory::Status, None, now)
    }

    fn handle_position_error(
        &self,
        session: &mut Session,
        error: PositionError,
        now: DateTime<Utc>,
    ) -> AdvisoryResponse {
        let text = error.user_message(session.locale).to_string();
        respond(session, text, IntentCategory::LocationRequest, None, now)
    }

    fn handle_text<R: Rng + ?Sized>(
        &self,
        session: &mut Session,
        text: &str,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> AdvisoryResponse {
        let intent = classify(text);
        let locale = intent.detected_locale.unwrap_or(session.locale);

        let mut resolved_now: Option<ResolvedMatch> = None;
        let mut unresolved_place: Option<&str> = None;

        if let Some(place) = intent.place_name.as_deref() {
            match self.store.find_by_name(place) {
                Some(reading) => {
                    let matched = ResolvedMatch::exact(reading.clone());
                    session.resolve(matched.clone());
                    resolved_now = Some(matched);
                }
                None => {
                    session.reset_location();
                    unresolved_place = Some(place);
                }
            }
        }

        let focus = match &resolved_now {
            Some(matched) => Some(matched),
            None if intent.category.needs_location() => session.last_resolved_match.as_ref(),
            None => None,
        };

        let category = if intent.category.needs_location()
            && focus.is_none()
            && unresolved_place.is_none()
        {
            IntentCategory::LocationRequest
        } else {
            intent.category
        };

        let request = ComposeRequest {
            category,
            focus,
            trend_anchor: session.last_resolved_match.as_ref(),
            unresolved_place,
            locale,
            trend_requested: intent.trend_requested,
            previous_greeting: session.last_greeting,
            current_year: now.year(),
        };
        let composition = compose(&request, rng);

        if let Some(index) = composition.greeting_index {
            session.last_greeting = Some(index);
        }

        let mut response = respond(session, composition.text, category, composition.trend_series, now);
        response.locale_used = locale;
        response
    }
}

/// Assemble the response from the session's location after the turn
fn respond(
    session: &Session,
    text: String,
    intent: IntentCategory,
    trend_series: Option<Vec<TrendPoint>>,
    now: DateTime<Utc>,
) -> AdvisoryResponse {
    let matched = session.last_resolved_match.clone();
    let score = matched.as_ref().map(|m| score_reading(&m.reading));
    let alerts = score.map(|s| generate_alerts(s, now)).unwrap_or_default();

    AdvisoryResponse {
        text,
        locale_used: session.locale,
        intent,
        matched,
        score,
        alerts,
        trend_series,
    }
}
