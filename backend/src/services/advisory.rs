//! Advisory conversation service
//!
//! Runs turns through the shared pipeline against a registered session and
//! optionally asks the generative provider about questions the keyword rules
//! could not place.

use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{is_in_india, AdvisoryPipeline, IntentCategory, Locale, ReadingStore, TurnEvent};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::GeminiClient;
use crate::models::{SessionCreated, TurnResponse};
use crate::services::prompt;
use crate::services::session::SessionRegistry;
use crate::AppState;

/// Advisory service
#[derive(Clone)]
pub struct AdvisoryService {
    store: Arc<ReadingStore>,
    sessions: SessionRegistry,
    gemini: Option<GeminiClient>,
    generative_fallback: bool,
    default_locale: Locale,
}

impl AdvisoryService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            sessions: state.sessions.clone(),
            gemini: state.gemini.clone(),
            generative_fallback: state.config.advisor.generative_fallback,
            default_locale: state.config.advisor.default_locale,
        }
    }

    /// Start a conversation; unknown locale codes use the default locale
    pub async fn start_session(&self, locale: Option<&str>) -> SessionCreated {
        let locale = locale
            .and_then(Locale::from_code)
            .unwrap_or(self.default_locale);
        let session_id = self.sessions.create(locale).await;
        SessionCreated { session_id, locale }
    }

    pub async fn end_session(&self, session_id: Uuid) -> AppResult<()> {
        self.sessions.remove(session_id).await
    }

    /// Handle one turn for a session
    pub async fn handle_turn(&self, session_id: Uuid, event: TurnEvent) -> AppResult<TurnResponse> {
        let handle = self.sessions.get(session_id).await?;

        let (response, fallback_prompt) = {
            let mut session = handle.lock().await;
            let mut rng = StdRng::from_entropy();
            let pipeline = AdvisoryPipeline::new(&self.store);
            let response = pipeline.handle(&mut session, &event, &mut rng, Utc::now());

            let fallback_prompt = match &event {
                TurnEvent::Text { text } if response.intent == IntentCategory::Fallback => Some(
                    prompt::fallback_prompt(
                        text,
                        session.last_resolved_match.as_ref(),
                        response.locale_used,
                    ),
                ),
                _ => None,
            };
            (response, fallback_prompt)
        };

        tracing::debug!(
            session_id = %session_id,
            intent = %response.intent,
            locale = %response.locale_used,
            score = ?response.score,
            "Turn handled"
        );

        let in_coverage_area = match &event {
            TurnEvent::Position { coordinates } => {
                Some(is_in_india(coordinates.latitude, coordinates.longitude))
            }
            _ => None,
        };

        let mut turn = TurnResponse {
            session_id,
            response,
            generated_text: None,
            provider_error: None,
            in_coverage_area,
        };

        if let (Some(prompt), Some(gemini), true) =
            (fallback_prompt, &self.gemini, self.generative_fallback)
        {
            match gemini.generate(&prompt).await {
                Ok(text) => turn.generated_text = Some(text),
                Err(e) => {
                    tracing::warn!(session_id = %session_id, "Generative fallback failed: {}", e);
                    turn.provider_error = Some(e.to_string());
                }
            }
        }

        Ok(turn)
    }

    /// Ask the generative provider directly
    pub async fn generate(&self, question: &str) -> AppResult<String> {
        let gemini = self
            .gemini
            .as_ref()
            .ok_or(AppError::GenerativeProviderDisabled)?;
        gemini.generate(&prompt::with_instructions(question)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use shared::{GpsCoordinates, PositionError};

    fn service() -> AdvisoryService {
        AdvisoryService::new(&AppState::new(Config::default(), ReadingStore::shipped(), None))
    }

    fn text(t: &str) -> TurnEvent {
        TurnEvent::Text { text: t.to_string() }
    }

    #[tokio::test]
    async fn test_turns_share_session_state() {
        let service = service();
        let created = service.start_session(None).await;
        assert_eq!(created.locale, Locale::En);

        service
            .handle_turn(created.session_id, text("status in Chennai"))
            .await
            .unwrap();
        let turn = service
            .handle_turn(created.session_id, text("show me the forecast"))
            .await
            .unwrap();

        assert_eq!(turn.response.intent, IntentCategory::Trend);
        assert_eq!(turn.response.matched.unwrap().reading.district, "Chennai");
        assert_eq!(turn.response.trend_series.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_position_turns() {
        let service = service();
        let id = service.start_session(Some("hi")).await.session_id;

        let failed = service
            .handle_turn(
                id,
                TurnEvent::PositionFailed {
                    error: PositionError::Timeout,
                },
            )
            .await
            .unwrap();
        assert_eq!(failed.response.intent, IntentCategory::LocationRequest);
        assert_eq!(failed.response.locale_used, Locale::Hi);

        let located = service
            .handle_turn(
                id,
                TurnEvent::Position {
                    coordinates: GpsCoordinates::new(12.97, 77.59),
                },
            )
            .await
            .unwrap();
        assert_eq!(located.response.matched.unwrap().reading.district, "Bengaluru");
        assert_eq!(located.in_coverage_area, Some(true));
        assert_eq!(failed.in_coverage_area, None);
    }

    #[tokio::test]
    async fn test_position_outside_india_is_flagged() {
        let service = service();
        let id = service.start_session(None).await.session_id;

        // Tokyo still resolves to the nearest reading, but is flagged
        let turn = service
            .handle_turn(
                id,
                TurnEvent::Position {
                    coordinates: GpsCoordinates::new(35.6762, 139.6503),
                },
            )
            .await
            .unwrap();

        assert!(turn.response.matched.is_some());
        assert_eq!(turn.in_coverage_area, Some(false));

        let text_turn = service.handle_turn(id, text("hello")).await.unwrap();
        assert_eq!(text_turn.in_coverage_area, None);
    }

    #[tokio::test]
    async fn test_fallback_without_provider_has_no_generated_text() {
        let service = service();
        let id = service.start_session(None).await.session_id;
        let turn = service.handle_turn(id, text("tell me a joke")).await.unwrap();
        assert_eq!(turn.response.intent, IntentCategory::Fallback);
        assert!(turn.generated_text.is_none());
        assert!(turn.provider_error.is_none());
    }

    #[tokio::test]
    async fn test_ended_session_is_gone() {
        let service = service();
        let id = service.start_session(None).await.session_id;
        service.end_session(id).await.unwrap();
        assert!(service.handle_turn(id, text("hello")).await.is_err());
    }

    #[tokio::test]
    async fn test_generate_without_provider_is_disabled() {
        let err = service().generate("hello").await.unwrap_err();
        assert!(matches!(err, AppError::GenerativeProviderDisabled));
    }
}
