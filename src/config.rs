//! Configuration
//!
//! Process configuration from environment variables, loaded once at startup.
//! Secrets are read-only after startup and never logged.

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Runtime configuration for the bot process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token
    pub telegram_token: String,
    /// Gemini API key
    pub gemini_api_key: String,
    /// Gemini model name (default: gemini-1.5-flash)
    pub gemini_model: String,
    /// Google Custom Search API key; image search disabled when unset
    pub google_api_key: Option<String>,
    /// Google Custom Search engine id; image search disabled when unset
    pub search_engine_id: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            telegram_token: require("TELEGRAM_TOKEN")?,
            gemini_api_key: require("GEMINI_API_KEY")?,
            gemini_model: optional("GEMINI_MODEL")
                .unwrap_or_else(|| "gemini-1.5-flash".to_string()),
            google_api_key: optional("GOOGLE_API_KEY"),
            search_engine_id: optional("CUSTOM_SEARCH_ENGINE_ID"),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::MissingVar(name))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
