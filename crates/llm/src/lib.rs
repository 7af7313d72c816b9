//! Uni Advisor LLM
//!
//! Generative-model client behind a single `TextProvider` seam: the bot
//! builds a prompt, the provider returns text. Ships a Gemini implementation
//! over the Generative Language REST API plus the shared HTTP client factory.

pub mod gemini;
pub mod http_client;
pub mod provider;
pub mod types;

// Re-export main types
pub use gemini::GeminiProvider;
pub use http_client::build_http_client;
pub use provider::{missing_api_key_error, parse_http_error, TextProvider};
pub use types::{LlmError, LlmResult, ProviderConfig};
