//! WebAssembly module for the Jal-Mitra groundwater assistant
//!
//! Provides client-side computation for:
//! - Health scores and alerts
//! - Nearest-reading and place-name lookups
//! - Intent classification
//! - Full advisory conversations via `AdvisorSession`

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

use shared::{
    classify, compute_score, generate_alerts, score_reading, validate_coordinates,
    AdvisoryPipeline, ReadingStore, ScoreBand,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    log("jal-mitra-wasm loaded");
}

fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Current time from the host clock
fn now() -> DateTime<Utc> {
    #[cfg(target_arch = "wasm32")]
    {
        let millis = js_sys::Date::now() as i64;
        DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Utc::now()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// A resolved reading with its derived score
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoredMatch {
    #[serde(flatten)]
    matched: ResolvedMatch,
    score: u8,
    band: ScoreBand,
}

impl From<ResolvedMatch> for ScoredMatch {
    fn from(matched: ResolvedMatch) -> Self {
        let score = score_reading(&matched.reading);
        Self {
            matched,
            score,
            band: ScoreBand::for_score(score),
        }
    }
}

/// Health score for a depth and status name
#[wasm_bindgen]
pub fn compute_health_score(level_m: f64, status: &str) -> Result<u8, JsValue> {
    let status: WaterStatus = status.parse().map_err(|e: String| JsValue::from_str(&e))?;
    Ok(compute_score(level_m, status))
}

/// Nearest shipped reading as JSON
#[wasm_bindgen]
pub fn find_nearest_reading(latitude: f64, longitude: f64) -> Result<Option<String>, JsValue> {
    nearest_match(latitude, longitude)
        .map_err(JsValue::from_str)?
        .map(|m| to_json(&m))
        .transpose()
}

fn nearest_match(latitude: f64, longitude: f64) -> Result<Option<ScoredMatch>, &'static str> {
    validate_coordinates(latitude, longitude)?;
    Ok(ReadingStore::shipped()
        .find_nearest(latitude, longitude)
        .map(ScoredMatch::from))
}

/// Exact district or state lookup as JSON; `undefined` when unknown
#[wasm_bindgen]
pub fn find_reading_by_name(name: &str) -> Result<Option<String>, JsValue> {
    ReadingStore::shipped()
        .find_by_name(name)
        .map(|r| to_json(&ScoredMatch::from(ResolvedMatch::exact(r.clone()))))
        .transpose()
}

/// Classified intent as JSON
#[wasm_bindgen]
pub fn classify_intent(text: &str) -> Result<String, JsValue> {
    to_json(&classify(text))
}

/// Alerts for a score as a JSON array
#[wasm_bindgen]
pub fn generate_alerts_json(score: u8) -> Result<String, JsValue> {
    to_json(&generate_alerts(score.min(100), now()))
}

/// One conversation running entirely in the browser
#[wasm_bindgen]
pub struct AdvisorSession {
    store: ReadingStore,
    session: Session,
    rng: StdRng,
}

#[wasm_bindgen]
impl AdvisorSession {
    #[wasm_bindgen(constructor)]
    pub fn new(locale: Option<String>) -> AdvisorSession {
        let locale = locale
            .as_deref()
            .and_then(Locale::from_code)
            .unwrap_or_default();
        Self::with_rng(locale, StdRng::from_entropy())
    }

    #[wasm_bindgen(getter)]
    pub fn locale(&self) -> String {
        self.session.locale.code().to_string()
    }

    #[wasm_bindgen(js_name = hasLocation)]
    pub fn has_location(&self) -> bool {
        self.session.state() == LocationState::LocationResolved
    }

    #[wasm_bindgen(js_name = handleText)]
    pub fn handle_text(&mut self, text: &str) -> Result<String, JsValue> {
        let response = self.turn(TurnEvent::Text {
            text: text.to_string(),
        });
        to_json(&response)
    }

    #[wasm_bindgen(js_name = handlePosition)]
    pub fn handle_position(&mut self, latitude: f64, longitude: f64) -> Result<String, JsValue> {
        let response = self
            .position_turn(latitude, longitude)
            .map_err(JsValue::from_str)?;
        to_json(&response)
    }

    /// `code` is one of `permission_denied`, `position_unavailable`,
    /// `timeout` or `unsupported`
    #[wasm_bindgen(js_name = handlePositionError)]
    pub fn handle_position_error(&mut self, code: &str) -> Result<String, JsValue> {
        let error = parse_position_error(code)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown position error: {}", code)))?;
        let response = self.turn(TurnEvent::PositionFailed { error });
        to_json(&response)
    }
}

impl AdvisorSession {
    fn with_rng(locale: Locale, rng: StdRng) -> Self {
        Self {
            store: ReadingStore::shipped(),
            session: Session::new(locale),
            rng,
        }
    }

    /// Coordinates are checked before the session can be touched
    fn position_turn(&mut self, latitude: f64, longitude: f64) -> Result<AdvisoryResponse, &'static str> {
        validate_coordinates(latitude, longitude)?;
        Ok(self.turn(TurnEvent::Position {
            coordinates: GpsCoordinates::new(latitude, longitude),
        }))
    }

    fn turn(&mut self, event: TurnEvent) -> AdvisoryResponse {
        let pipeline = AdvisoryPipeline::new(&self.store);
        let response = pipeline.handle(&mut self.session, &event, &mut self.rng, now());
        log(&format!("turn handled: {}", response.intent));
        response
    }
}

fn parse_position_error(code: &str) -> Option<PositionError> {
    match code.trim().to_lowercase().as_str() {
        "permission_denied" | "1" => Some(PositionError::PermissionDenied),
        "position_unavailable" | "2" => Some(PositionError::PositionUnavailable),
        "timeout" | "3" => Some(PositionError::Timeout),
        "unsupported" => Some(PositionError::Unsupported),
        _ => None,
    }
}
