//! Text Provider Trait
//!
//! Defines the common interface for generative text backends. The bot only
//! ever sees this trait; tests substitute a scripted implementation.

use async_trait::async_trait;

use super::types::{LlmError, LlmResult};

/// Trait that all text providers must implement.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Generate text for a single prompt.
    ///
    /// One bounded attempt: no retry loop lives below this seam. Callers
    /// handle failure by falling back to an apology message.
    async fn generate(&self, prompt: &str) -> LlmResult<String>;
}

/// Helper function to create an error for a missing API key
pub fn missing_api_key_error(provider: &str) -> LlmError {
    LlmError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper function to map HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> LlmError {
    match status {
        401 | 403 => LlmError::AuthenticationFailed {
            message: format!("{}: {}", provider, body),
        },
        429 => LlmError::RateLimited {
            message: body.to_string(),
        },
        400 | 404 => LlmError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => LlmError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => LlmError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_error() {
        let err = missing_api_key_error("gemini");
        assert!(err.to_string().contains("gemini"));
    }

    #[test]
    fn test_parse_http_error_mapping() {
        assert!(matches!(
            parse_http_error(401, "bad key", "gemini"),
            LlmError::AuthenticationFailed { .. }
        ));
        assert!(matches!(
            parse_http_error(429, "quota", "gemini"),
            LlmError::RateLimited { .. }
        ));
        assert!(matches!(
            parse_http_error(400, "bad request", "gemini"),
            LlmError::InvalidRequest { .. }
        ));
        assert!(matches!(
            parse_http_error(503, "overloaded", "gemini"),
            LlmError::ServerError {
                status: Some(503),
                ..
            }
        ));
        assert!(matches!(
            parse_http_error(302, "redirect", "gemini"),
            LlmError::Other { .. }
        ));
    }
}
