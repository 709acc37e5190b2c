//! Prompt assembly for the generative provider

use shared::{score_reading, Locale, ResolvedMatch};

const ASSISTANT_INSTRUCTIONS: &str = "\
You are Jal-Mitra, a friendly and helpful assistant for groundwater and water-level questions in India.
Answer the user's question directly and stay on topic.
Base answers on the monitoring data given below when it is present. If you do not have specific information, say so clearly and offer alternative help.
Encourage the user to share a location or name a district for region-specific insight.
Give practical, actionable advice with concrete steps where possible.";

/// Instructions followed by the user's question
pub fn with_instructions(question: &str) -> String {
    format!("{}\n\nUser question: {}", ASSISTANT_INSTRUCTIONS, question.trim())
}

/// Prompt for a question the keyword classifier did not understand
///
/// Includes the session's known reading, if any, and the reply language.
pub fn fallback_prompt(question: &str, known: Option<&ResolvedMatch>, locale: Locale) -> String {
    let mut prompt = String::from(ASSISTANT_INSTRUCTIONS);

    if let Some(matched) = known {
        let reading = &matched.reading;
        prompt.push_str(&format!(
            "\n\nMonitoring data for the user's area: {} ({} block). Groundwater level {:.1} m below surface, status {}, health score {}/100.",
            reading.place_label(),
            reading.block,
            reading.level_m,
            reading.status,
            score_reading(reading)
        ));
    }

    let language = match locale {
        Locale::En => "English",
        Locale::Hi => "Hindi",
    };
    prompt.push_str(&format!("\n\nReply in {}.", language));
    prompt.push_str(&format!("\n\nUser question: {}", question.trim()));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ReadingStore;

    #[test]
    fn test_fallback_prompt_includes_known_reading() {
        let store = ReadingStore::shipped();
        let matched = ResolvedMatch::exact(store.find_by_name("Jaipur").unwrap().clone());
        let prompt = fallback_prompt("  will it rain?  ", Some(&matched), Locale::Hi);
        assert!(prompt.contains("Jaipur, Rajasthan"));
        assert!(prompt.contains("health score 23/100"));
        assert!(prompt.contains("Reply in Hindi."));
        assert!(prompt.ends_with("User question: will it rain?"));
    }

    #[test]
    fn test_fallback_prompt_without_location() {
        let prompt = fallback_prompt("tell me a joke", None, Locale::En);
        assert!(!prompt.contains("Monitoring data"));
        assert!(prompt.contains("Reply in English."));
    }
}
