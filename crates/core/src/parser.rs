//! Response Parser
//!
//! Model output is rarely clean JSON: it arrives wrapped in prose, code
//! fences, or both. The parser cuts the candidate object out of the raw text
//! and hands structural validation to serde_json.

use crate::error::{AdvisorError, AdvisorResult};

/// Extract the JSON object embedded in raw model output.
///
/// Takes the substring from the first `{` to the last `}` and strips any
/// ```` ```json ```` / ```` ``` ```` fence markers that survived inside it.
/// Returns `"{}"` when no enclosing braces exist, so the caller sees an
/// empty object rather than an error for contentless replies.
pub fn extract_json(raw: &str) -> String {
    let start = match raw.find('{') {
        Some(i) => i,
        None => return "{}".to_string(),
    };
    let end = match raw.rfind('}') {
        Some(i) if i >= start => i,
        _ => return "{}".to_string(),
    };
    raw[start..=end]
        .replace("```json", "")
        .replace("```", "")
}

/// Parse raw model output into a JSON value.
///
/// Extraction first, then a structural parse. Structurally invalid JSON is a
/// hard `Parse` failure; the caller owns any user-facing fallback messaging.
pub fn parse_response(raw: &str) -> AdvisorResult<serde_json::Value> {
    let candidate = extract_json(raw);
    serde_json::from_str(&candidate).map_err(|e| AdvisorError::Parse(e.to_string()))
}
