//! HTTP Client Factory
//!
//! Builds reqwest clients with a bounded overall timeout. Every external
//! call in the workspace goes through a client built here, so a hung
//! upstream can never stall a session handler indefinitely.

use std::time::Duration;

/// Default per-request timeout for model calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Build a `reqwest::Client` with the given overall request timeout.
pub fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("failed to build reqwest client")
}
