//! Session
//!
//! Everything one conversation owns: dialogue state, the collected profile,
//! the matched catalog, the currently selected university, and the question
//! history. Replaced wholesale on restart; never shared across chats.

use crate::catalog::Catalog;
use crate::dialogue::{Answer, DialogueState, GREETING_PROMPT};
use crate::history::QuestionHistory;
use crate::profile::StudentProfile;
use crate::university::UniversityRecord;

/// Result of feeding one questionnaire input into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Ask the next collection question.
    AskNext(&'static str),
    /// All five fields handled; run matching now.
    StartMatching,
    /// The session is not collecting input right now.
    Ignored,
}

/// Result of a "back" signal while browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Re-render the overview for the current catalog.
    ShowOverview,
    /// Catalog is empty (e.g. restart mid-flow); the session is over.
    SessionEnded,
}

/// State for one conversation.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub state: DialogueState,
    pub profile: StudentProfile,
    pub catalog: Catalog,
    pub selected: Option<UniversityRecord>,
    pub history: QuestionHistory,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Clear everything and re-enter the first collection state.
    ///
    /// Returns the greeting prompt to show the user.
    pub fn restart(&mut self) -> &'static str {
        *self = Session::new();
        GREETING_PROMPT
    }

    /// Feed one questionnaire input (text or skip) into the machine.
    ///
    /// Text is stored into the field the current state collects; skip leaves
    /// it unset. Either way the machine advances, and after the fifth input
    /// it lands in `Matching`.
    pub fn answer(&mut self, answer: Answer) -> AnswerOutcome {
        let field = match self.state.collecting_field() {
            Some(field) => field,
            None => return AnswerOutcome::Ignored,
        };
        if let Answer::Text(text) = answer {
            self.profile.set(field, text);
        }
        match self.state.next_collection() {
            Some((next, prompt)) => {
                self.state = next;
                AnswerOutcome::AskNext(prompt)
            }
            None => {
                self.state = DialogueState::Matching;
                AnswerOutcome::StartMatching
            }
        }
    }

    /// Install the freshly matched catalog and enter browsing.
    pub fn install_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.state = DialogueState::Browsing;
    }

    /// Select a university for a follow-up question and enter question mode.
    ///
    /// Returns the selected record, or `None` for a stale/unknown id.
    pub fn select_for_question(&mut self, id: &str) -> Option<UniversityRecord> {
        let record = self.catalog.lookup(id)?.clone();
        self.selected = Some(record.clone());
        self.state = DialogueState::Question;
        Some(record)
    }

    /// Record an answered question and return to browsing.
    pub fn question_answered(&mut self, university_name: &str, question: &str) {
        self.history.record(university_name, question);
        self.state = DialogueState::Browsing;
    }

    /// Handle a "back" signal: overview if there is a catalog, end otherwise.
    pub fn back(&mut self) -> BackOutcome {
        if self.catalog.is_empty() {
            BackOutcome::SessionEnded
        } else {
            self.state = DialogueState::Browsing;
            BackOutcome::ShowOverview
        }
    }
}
