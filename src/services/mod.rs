//! Bot Services
//!
//! Transport wiring, view rendering, callback routing, the matching
//! pipeline, and image resolution.

pub mod bot;
pub mod images;
pub mod matching;
pub mod router;
pub mod views;
