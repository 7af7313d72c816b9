//! University Identifiers
//!
//! Short stable identifiers derived from university names. The id travels
//! inside Telegram callback payloads (`r_<id>`, `s_<id>`, ...), so it must be
//! deterministic for the session's lifetime and short enough to fit the
//! 64-byte callback-data limit alongside its action prefix.

use sha2::{Digest, Sha256};

/// Number of hex characters in a university identifier.
pub const ID_LEN: usize = 8;

/// Derive the identifier for a university name.
///
/// SHA-256 of the UTF-8 name, truncated to the first 8 lowercase hex
/// characters. Same name always yields the same id within a process (and
/// across processes, since no salt is involved). Collisions between distinct
/// names are possible at this length; the catalog skips the colliding record
/// instead of overwriting.
pub fn university_id(name: &str) -> String {
    let digest = Sha256::digest(name.as_bytes());
    digest[..ID_LEN / 2]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
