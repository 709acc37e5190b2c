//! Localized response composition
//!
//! Composition is total: every combination of inputs yields non-empty text.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog;
use crate::models::{IntentCategory, ResolvedMatch, TrendPoint, WaterStatus};
use crate::scoring::score_reading;
use crate::trend::synthesize_trend;
use crate::types::Locale;

/// Inputs for composing one answer
#[derive(Debug, Clone)]
pub struct ComposeRequest<'a> {
    pub category: IntentCategory,
    /// Match whose structured block is rendered this turn
    pub focus: Option<&'a ResolvedMatch>,
    /// Known match a trend series falls back to when there is no focus
    pub trend_anchor: Option<&'a ResolvedMatch>,
    /// Place named by the user that could not be resolved
    pub unresolved_place: Option<&'a str>,
    pub locale: Locale,
    pub trend_requested: bool,
    pub previous_greeting: Option<usize>,
    pub current_year: i32,
}

/// Rendered answer
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub text: String,
    pub trend_series: Option<Vec<TrendPoint>>,
    /// Catalog index of the greeting used, if any
    pub greeting_index: Option<usize>,
}

pub fn compose<R: Rng + ?Sized>(request: &ComposeRequest<'_>, rng: &mut R) -> Composition {
    let locale = request.locale;
    let mut sections: Vec<String> = Vec::new();
    let mut greeting_index = None;

    if let Some(place) = request.unresolved_place {
        sections.push(catalog::no_data(place, locale));
    }

    // Location-dependent lead-ins only open an answer about a known place
    let has_subject = request.focus.is_some() || !request.category.needs_location();
    if let (Some(leads), true) = (catalog::lead_ins(request.category, locale), has_subject) {
        if let Some(lead) = leads.choose(rng) {
            sections.push((*lead).to_string());
        }
    }

    match request.category {
        IntentCategory::Greeting => {
            let greetings = catalog::greetings(locale);
            let index = pick_greeting(greetings.len(), request.previous_greeting, rng);
            sections.push(greetings[index].to_string());
            greeting_index = Some(index);
        }
        IntentCategory::Conservation => sections.push(catalog::conservation_tips(locale).to_string()),
        IntentCategory::Crops => sections.push(catalog::crop_advice(locale).to_string()),
        IntentCategory::FloodRisk => sections.push(catalog::flood_risk_guidance(locale).to_string()),
        IntentCategory::DataSource => sections.push(catalog::data_sources(locale).to_string()),
        IntentCategory::LocationRequest => sections.push(catalog::location_prompt(locale).to_string()),
        IntentCategory::Fallback => sections.push(catalog::fallback(locale).to_string()),
        IntentCategory::Status | IntentCategory::Trend => {}
    }

    match request.focus {
        Some(focus) => {
            sections.push(reading_block(focus, locale));
            if let Some(line) = status_context(focus.reading.status, locale, rng) {
                sections.push(line.to_string());
            }
        }
        None if request.category.needs_location() && request.unresolved_place.is_none() => {
            sections.push(catalog::location_prompt(locale).to_string());
        }
        None => {}
    }

    let mut trend_series = None;
    if let (Some(anchor), true) = (request.focus.or(request.trend_anchor), request.trend_requested) {
        let series = synthesize_trend(anchor.reading.level_m, request.current_year, rng);
        if let Some(summary) = summarize(&series, locale) {
            sections.push(summary);
        }
        trend_series = Some(series);
    }

    if sections.is_empty() {
        sections.push(catalog::fallback(locale).to_string());
    }

    Composition {
        text: sections.join("\n\n"),
        trend_series,
        greeting_index,
    }
}

/// Uniform greeting index that never equals `previous`
///
/// Uses a single draw: with a previous index `p` the pick is made among the
/// other `len - 1` entries.
pub fn pick_greeting<R: Rng + ?Sized>(len: usize, previous: Option<usize>, rng: &mut R) -> usize {
    match (len, previous) {
        (0 | 1, _) => 0,
        (_, Some(p)) if p < len => {
            let index = rng.gen_range(0..len - 1);
            if index >= p {
                index + 1
            } else {
                index
            }
        }
        _ => rng.gen_range(0..len),
    }
}

/// Structured block for one match
pub fn reading_block(matched: &ResolvedMatch, locale: Locale) -> String {
    let labels = catalog::reading_labels(locale);
    let reading = &matched.reading;
    let score = score_reading(reading);

    let mut lines = vec![
        format!("📍 {}: {}", labels.location, reading.place_label()),
        format!(
            "💧 {}: {:.1} {}",
            labels.water_level, reading.level_m, labels.metres_below
        ),
        format!("📊 {}: {}", labels.status, reading.status.label(locale)),
        format!("❤️ {}: {}/100", labels.health_score, score),
    ];
    if matched.distance_km > 0.0 {
        lines.push(format!(
            "📏 {}: {:.1} {}",
            labels.distance, matched.distance_km, labels.km_from_point
        ));
    }
    lines.join("\n")
}

fn status_context<R: Rng + ?Sized>(
    status: WaterStatus,
    locale: Locale,
    rng: &mut R,
) -> Option<&'static str> {
    let lines = match status {
        WaterStatus::Critical => catalog::critical_context(locale),
        WaterStatus::Good => catalog::good_context(locale),
        WaterStatus::Warning | WaterStatus::Moderate => return None,
    };
    lines.choose(rng).copied()
}

fn summarize(series: &[TrendPoint], locale: Locale) -> Option<String> {
    let first = series.first()?;
    let last = series.last()?;
    Some(catalog::trend_summary(
        &first.year_label,
        first.level,
        &last.year_label,
        last.level,
        locale,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ReadingStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ALL_CATEGORIES: [IntentCategory; 9] = [
        IntentCategory::Conservation,
        IntentCategory::Crops,
        IntentCategory::Status,
        IntentCategory::Trend,
        IntentCategory::FloodRisk,
        IntentCategory::DataSource,
        IntentCategory::Greeting,
        IntentCategory::LocationRequest,
        IntentCategory::Fallback,
    ];

    fn request(category: IntentCategory, locale: Locale) -> ComposeRequest<'static> {
        ComposeRequest {
            category,
            focus: None,
            trend_anchor: None,
            unresolved_place: None,
            locale,
            trend_requested: false,
            previous_greeting: None,
            current_year: 2025,
        }
    }

    fn pune() -> ResolvedMatch {
        let store = ReadingStore::shipped();
        ResolvedMatch::exact(store.find_by_name("pune").unwrap().clone())
    }

    #[test]
    fn test_never_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let focus = pune();
        for locale in [Locale::En, Locale::Hi] {
            for category in ALL_CATEGORIES {
                let mut req = request(category, locale);
                assert!(!compose(&req, &mut rng).text.is_empty());
                req.focus = Some(&focus);
                assert!(!compose(&req, &mut rng).text.is_empty());
                req.focus = None;
                req.unresolved_place = Some("Atlantis");
                assert!(!compose(&req, &mut rng).text.is_empty());
            }
        }
    }

    #[test]
    fn test_greeting_never_repeats() {
        let mut rng = StdRng::seed_from_u64(11);
        let len = catalog::greetings(Locale::En).len();
        let mut previous = None;
        for _ in 0..200 {
            let index = pick_greeting(len, previous, &mut rng);
            assert!(index < len);
            assert_ne!(Some(index), previous);
            previous = Some(index);
        }
    }

    #[test]
    fn test_greeting_single_entry_catalog() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick_greeting(1, Some(0), &mut rng), 0);
    }

    #[test]
    fn test_greeting_reproducible_with_seed() {
        let req = request(IntentCategory::Greeting, Locale::En);
        let a = compose(&req, &mut StdRng::seed_from_u64(5));
        let b = compose(&req, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
        assert!(a.greeting_index.is_some());
    }

    #[test]
    fn test_structured_block_hindi_labels() {
        let focus = pune();
        let block = reading_block(&focus, Locale::Hi);
        assert!(block.contains("स्थान"));
        assert!(block.contains("गंभीर"));
        assert!(block.contains("30/100"));
        // Exact name matches carry no distance line
        assert!(!block.contains("किमी"));
    }

    #[test]
    fn test_structured_block_shows_distance() {
        let store = ReadingStore::shipped();
        let m = store.find_nearest(18.6298, 73.7997).unwrap();
        let block = reading_block(&m, Locale::En);
        assert!(block.contains("Pune, Maharashtra"));
        assert!(block.contains("km from nearest data point"));
    }

    #[test]
    fn test_status_without_focus_asks_for_location() {
        let mut rng = StdRng::seed_from_u64(8);
        let out = compose(&request(IntentCategory::Status, Locale::En), &mut rng);
        assert!(out.text.contains(catalog::location_prompt(Locale::En)));
    }

    #[test]
    fn test_unresolved_place_names_place() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut req = request(IntentCategory::Status, Locale::En);
        req.unresolved_place = Some("Atlantis");
        let out = compose(&req, &mut rng);
        assert!(out.text.contains("Atlantis"));
        assert!(out.trend_series.is_none());
    }

    #[test]
    fn test_trend_series_needs_a_match() {
        let mut rng = StdRng::seed_from_u64(8);
        let focus = pune();
        let mut req = request(IntentCategory::Trend, Locale::En);
        req.trend_requested = true;
        assert!(compose(&req, &mut rng).trend_series.is_none());

        req.focus = Some(&focus);
        let series = compose(&req, &mut rng).trend_series.unwrap();
        assert_eq!(series.len(), 10);
        assert_eq!(series.last().unwrap().year_label, "2025");
    }

    #[test]
    fn test_trend_anchor_without_focus() {
        let mut rng = StdRng::seed_from_u64(8);
        let anchor = pune();
        let mut req = request(IntentCategory::Conservation, Locale::En);
        req.trend_requested = true;
        req.trend_anchor = Some(&anchor);

        let out = compose(&req, &mut rng);

        let series = out.trend_series.unwrap();
        assert_eq!(series.len(), 10);
        assert!((series[9].level - 12.0).abs() <= 1.0 + 1e-9);
        // The structured block belongs to the focus only
        assert!(!out.text.contains("Pune, Maharashtra"));
    }

    #[test]
    fn test_fallback_is_fixed() {
        let req = request(IntentCategory::Fallback, Locale::En);
        let a = compose(&req, &mut StdRng::seed_from_u64(1));
        let b = compose(&req, &mut StdRng::seed_from_u64(2));
        assert_eq!(a.text, b.text);
    }
}
