//! Callback Router
//!
//! Parses inline-button callback payloads into structured actions. The
//! payload encoding is `<action-letter>_<id>` with reserved literal payloads
//! for session-level actions, and must stay stable: payloads live inside
//! messages already delivered to clients.

/// Action parsed from a callback payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    /// `r_<id>`: admission requirements and deadlines
    Requirements(String),
    /// `s_<id>`: scholarships
    Scholarships(String),
    /// `q_<id>`: enter question mode for this university
    Question(String),
    /// `u_<id>`: full detail view
    Detail(String),
    /// `back`: return to the overview list
    Back,
    /// `restart`: wipe the session and start the questionnaire over
    Restart,
    /// `history`: list questions asked about the selected university
    History,
    /// `clear_history`: forget the selected university's questions
    ClearHistory,
}

impl CallbackAction {
    /// Parse a callback payload. Unknown payloads yield `None`.
    pub fn parse(payload: &str) -> Option<CallbackAction> {
        match payload {
            "back" => return Some(CallbackAction::Back),
            "restart" => return Some(CallbackAction::Restart),
            "history" => return Some(CallbackAction::History),
            "clear_history" => return Some(CallbackAction::ClearHistory),
            _ => {}
        }
        let (letter, id) = payload.split_once('_')?;
        if id.is_empty() {
            return None;
        }
        match letter {
            "r" => Some(CallbackAction::Requirements(id.to_string())),
            "s" => Some(CallbackAction::Scholarships(id.to_string())),
            "q" => Some(CallbackAction::Question(id.to_string())),
            "u" => Some(CallbackAction::Detail(id.to_string())),
            _ => None,
        }
    }
}
