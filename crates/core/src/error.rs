//! Core Error Types
//!
//! Error taxonomy for the advisor domain crate. Kept dependency-light
//! (thiserror + serde_json only) so the core crate stays transport-free.

use thiserror::Error;

/// Errors produced while turning model output into session state.
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Model output could not be parsed as JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Response parsed fine but contained no usable university records
    #[error("No universities found in model response")]
    NoResults,

    /// A referenced identifier is not in the current catalog
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for core errors
pub type AdvisorResult<T> = Result<T, AdvisorError>;

impl AdvisorError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
