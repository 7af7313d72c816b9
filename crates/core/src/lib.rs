//! Uni Advisor Core
//!
//! Domain logic for the university-matching dialogue:
//! - Student profile collection via a linear questionnaire
//! - University records parsed out of generative-model output
//! - Session-scoped catalog keyed by short stable identifiers
//! - Prompt templates for matching and follow-up questions
//!
//! This crate is transport-free: it knows nothing about Telegram or HTTP.

pub mod catalog;
pub mod dialogue;
pub mod error;
pub mod history;
pub mod ident;
pub mod parser;
pub mod profile;
pub mod prompt;
pub mod session;
pub mod university;

// Re-export main types
pub use catalog::Catalog;
pub use dialogue::{Answer, DialogueState};
pub use error::{AdvisorError, AdvisorResult};
pub use history::QuestionHistory;
pub use ident::university_id;
pub use parser::{extract_json, parse_response};
pub use profile::{ProfileField, StudentProfile};
pub use prompt::{matching_prompt, question_prompt};
pub use session::{AnswerOutcome, BackOutcome, Session};
pub use university::{Deadlines, Requirements, Scholarships, Tuition, UniversityRecord};
