//! Dialogue State Machine
//!
//! Linear questionnaire driving profile collection, followed by the matching
//! step and the browsing mode. States are an explicit enum rather than
//! stringly-keyed session fields, so an impossible transition is a compile
//! error, not a runtime surprise.

use crate::profile::ProfileField;

/// Dialogue state for one session.
///
/// Collection states advance in fixed order:
/// `CollectGpa -> CollectCountry -> CollectSat -> CollectIelts ->
/// CollectAdditionalInfo -> Matching -> Browsing`. `Question` is a sub-state
/// of browsing entered when the user picks "ask a question".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogueState {
    #[default]
    CollectGpa,
    CollectCountry,
    CollectSat,
    CollectIelts,
    CollectAdditionalInfo,
    Matching,
    Browsing,
    Question,
}

/// User input to a collection state: free text, or an explicit skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Skip,
}

/// Prompt shown when the questionnaire (re)starts.
pub const GREETING_PROMPT: &str = "👋 Hi! I'll help you find universities that fit you.\n\n\
     Please enter your GPA (for example, 3.5)\n\
     Send /skip to leave this step out";

impl DialogueState {
    /// The profile field this state collects, if it is a collection state.
    pub fn collecting_field(&self) -> Option<ProfileField> {
        match self {
            DialogueState::CollectGpa => Some(ProfileField::Gpa),
            DialogueState::CollectCountry => Some(ProfileField::Country),
            DialogueState::CollectSat => Some(ProfileField::Sat),
            DialogueState::CollectIelts => Some(ProfileField::Ielts),
            DialogueState::CollectAdditionalInfo => Some(ProfileField::AdditionalInfo),
            _ => None,
        }
    }

    /// The collection state after this one, with the prompt for it.
    ///
    /// Returns `None` for the last collection state (the next step is
    /// matching) and for non-collection states.
    pub fn next_collection(&self) -> Option<(DialogueState, &'static str)> {
        match self {
            DialogueState::CollectGpa => Some((
                DialogueState::CollectCountry,
                "Great! Now enter the country or city where you want to study (or /skip):",
            )),
            DialogueState::CollectCountry => Some((
                DialogueState::CollectSat,
                "Good! Now enter your SAT score (or /skip):",
            )),
            DialogueState::CollectSat => Some((
                DialogueState::CollectIelts,
                "Great! Now enter your IELTS score (or /skip):",
            )),
            DialogueState::CollectIelts => Some((
                DialogueState::CollectAdditionalInfo,
                "Good! Add any additional information about yourself (or /skip):",
            )),
            _ => None,
        }
    }

    /// Whether this state accepts questionnaire input.
    pub fn is_collecting(&self) -> bool {
        self.collecting_field().is_some()
    }
}
