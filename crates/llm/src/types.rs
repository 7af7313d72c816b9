//! LLM Types
//!
//! Provider configuration and the error taxonomy shared by all providers.

use thiserror::Error;

/// Configuration for a text provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API key; `None` fails fast with an authentication error.
    pub api_key: Option<String>,
    /// Model identifier, e.g. `gemini-1.5-flash`.
    pub model: String,
    /// Override for the API base URL (tests point this at a local server).
    pub base_url: Option<String>,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            model: model.into(),
            base_url: None,
        }
    }
}

/// Errors returned by text providers.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    /// Authentication failed (invalid or missing API key)
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// Rate limit exceeded
    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    /// Invalid request (bad parameters)
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Server error from the provider
    #[error("Server error ({status:?}): {message}")]
    ServerError { message: String, status: Option<u16> },

    /// Network/connection error
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// The request exceeded the client timeout
    #[error("Request timed out")]
    Timeout,

    /// Response arrived but carried no text
    #[error("Empty response from model")]
    EmptyResponse,

    /// Response body could not be parsed
    #[error("Response parse error: {message}")]
    ParseError { message: String },

    /// Other error
    #[error("{message}")]
    Other { message: String },
}

/// Result type alias for provider operations
pub type LlmResult<T> = Result<T, LlmError>;
