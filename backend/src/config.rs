//! Configuration management for the Jal-Mitra advisory service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides such as JALMITRA__SERVER__PORT

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::Locale;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Conversation behaviour
    pub advisor: AdvisorConfig,

    /// Reading table source
    pub dataset: DatasetConfig,

    /// Generative text provider
    pub gemini: GeminiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdvisorConfig {
    /// Locale for new sessions that do not ask for one
    pub default_locale: Locale,

    /// Ask the generative provider when a text turn is not understood
    pub generative_fallback: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatasetConfig {
    /// CSV file replacing the shipped reading table
    pub csv_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// API base URL
    pub endpoint: String,

    /// Model name
    pub model: String,

    /// API key; the client is disabled when absent
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("JALMITRA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("advisor.default_locale", "en")?
            .set_default("advisor.generative_fallback", false)?
            .set_default("gemini.endpoint", "https://generativelanguage.googleapis.com/v1beta")?
            .set_default("gemini.model", "gemini-pro")?
            .set_default("gemini.timeout_secs", 30)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (JALMITRA__ prefix)
            .add_source(
                Environment::with_prefix("JALMITRA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::En,
            generative_fallback: false,
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-pro".to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            advisor: AdvisorConfig::default(),
            dataset: DatasetConfig::default(),
            gemini: GeminiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_uses_code_defaults() {
        let config = Config::load().unwrap();
        assert!(!config.environment.is_empty());
        assert!(config.gemini.timeout_secs > 0);
        assert!(!config.gemini.model.is_empty());
    }

    #[test]
    fn test_default_config_has_no_generative_client() {
        let config = Config::default();
        assert!(config.gemini.api_key.is_none());
        assert!(!config.advisor.generative_fallback);
        assert_eq!(config.advisor.default_locale, Locale::En);
        assert!(config.dataset.csv_path.is_none());
    }
}
