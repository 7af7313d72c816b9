//! View Rendering
//!
//! Formats catalog records and session outcomes into Telegram-friendly text
//! plus inline keyboards. Pure formatting: every function here is a function
//! of its inputs, so the rendering layer is testable without a live bot.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use uni_advisor_core::UniversityRecord;

// ---------------------------------------------------------------------------
// User-facing messages
// ---------------------------------------------------------------------------

pub const MSG_NEED_START: &str = "Send /start to begin your university search.";
pub const MSG_RESTART: &str = "🔄 Let's start over! Enter your GPA:";
pub const MSG_ANALYZING: &str =
    "*🔄 Analyzing your data and picking matching universities...*";
pub const MSG_THINKING: &str = "🤔 *Working on a detailed answer to your question...*";
pub const MSG_FOUND_HEADER: &str = "🎯 *Found matching universities!*\n\
     _Use the buttons under each university for more details_";
pub const MSG_PICK_HEADER: &str = "🎯 *Pick a university to see its information:*";
pub const MSG_PICK_FOOTER: &str =
    "💡 *Choose an action for the university you are interested in*";
pub const MSG_MATCH_FAILED: &str =
    "❌ Something went wrong while matching. Please try again with /start";
pub const MSG_QUESTION_FAILED: &str = "❌ *Could not process your question*\n\
     Try rephrasing it, or go back to the university overview";
pub const MSG_NOT_FOUND: &str = "❌ University information not found";
pub const MSG_SESSION_ENDED: &str =
    "❌ No university information available. Start a new search with /start";
pub const MSG_USE_BUTTONS: &str =
    "💡 Use the buttons under the university cards, or /start to search again.";
pub const MSG_MATCHING_IN_PROGRESS: &str = "⏳ Still matching, one moment...";
pub const MSG_HISTORY_CLEARED: &str = "🗑️ Question history cleared";
pub const MSG_HISTORY_EMPTY: &str = "📝 No questions asked yet";

/// Prompt shown when the user enters question mode.
pub fn ask_prompt(university_name: &str) -> String {
    format!(
        "❓ *Ask your question about {}*\n\n\
         I'll do my best to give you detailed information on the topic.",
        university_name
    )
}

/// Header for a free-form question answer.
pub fn answer_text(university_name: &str, answer: &str) -> String {
    format!(
        "*Answer to your question about {}:*\n\n{}\n\n\
         _Ask another question or go back to the university overview_",
        university_name, answer
    )
}

// ---------------------------------------------------------------------------
// Detail views
// ---------------------------------------------------------------------------

/// Which focused sub-view of one record to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailView {
    Requirements,
    Scholarships,
    Full,
}

/// Render a focused sub-view for one record.
pub fn render_detail(view: DetailView, record: &UniversityRecord) -> String {
    match view {
        DetailView::Requirements => requirements_text(record),
        DetailView::Scholarships => scholarships_text(record),
        DetailView::Full => card_text(record),
    }
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary card: name, description, programs, tuition.
pub fn card_text(record: &UniversityRecord) -> String {
    format!(
        "🏛 *{}*\n\n\
         📝 *Description:*\n{}\n\n\
         🎓 *Available programs:*\n{}\n\n\
         💰 *Tuition:*\n{} {}/year",
        record.name,
        record.description,
        bullet_list(&record.programs),
        record.tuition.amount,
        record.tuition.currency,
    )
}

fn requirements_text(record: &UniversityRecord) -> String {
    let req = &record.requirements;
    let deadlines = &record.deadlines;
    format!(
        "📋 *Admission requirements for {}*\n\n\
         📊 *GPA:* {}\n\
         📝 *SAT:* {}\n\
         🌐 *IELTS:* {}\n\n\
         📎 *Required documents:*\n{}\n\n\
         ℹ️ *Additional:*\n{}\n\n\
         📅 *Application deadlines:*\n\
         • Early decision: {}\n\
         • Regular decision: {}\n\
         • Rolling admission: {}",
        record.name,
        req.gpa,
        req.sat,
        req.ielts,
        req.documents,
        req.additional,
        deadlines.early,
        deadlines.regular,
        deadlines.rolling,
    )
}

fn scholarships_text(record: &UniversityRecord) -> String {
    let s = &record.scholarships;
    format!(
        "💰 *Scholarships at {}*\n\n\
         📋 *Available scholarship types:*\n{}\n\n\
         💵 *Scholarship amounts:*\n{}\n\n\
         ✅ *Eligibility requirements:*\n{}",
        record.name,
        bullet_list(&s.types),
        bullet_list(&s.amounts),
        s.requirements,
    )
}

/// Numbered list of previously asked questions.
pub fn history_text(university_name: &str, questions: &[String]) -> String {
    let mut text = format!("📝 *Questions asked about {}:*\n\n", university_name);
    for (i, question) in questions.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, question));
    }
    text
}

// ---------------------------------------------------------------------------
// Keyboards
// ---------------------------------------------------------------------------

/// The four-action keyboard attached to every overview card.
pub fn card_keyboard(id: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("📋 Requirements", format!("r_{}", id)),
            InlineKeyboardButton::callback("💰 Scholarships", format!("s_{}", id)),
        ],
        vec![
            InlineKeyboardButton::callback("❓ Ask a question", format!("q_{}", id)),
            InlineKeyboardButton::callback("📚 More details", format!("u_{}", id)),
        ],
    ])
}

pub fn back_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "↩️ Back",
        "back",
    )]])
}

pub fn restart_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "🔄 Start a new search",
        "restart",
    )]])
}

/// Buttons offered under a question answer.
pub fn question_reply_keyboard(id: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("↩️ Back to overview", "back"),
        InlineKeyboardButton::callback("❓ Ask another question", format!("q_{}", id)),
    ]])
}

/// Buttons offered when a question could not be answered.
pub fn question_retry_keyboard(id: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("🔄 Try again", format!("q_{}", id)),
        InlineKeyboardButton::callback("↩️ Back", "back"),
    ]])
}

/// Buttons under the question-history view.
pub fn history_keyboard(id: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "❓ Ask a new question",
            format!("q_{}", id),
        )],
        vec![InlineKeyboardButton::callback(
            "🗑️ Clear history",
            "clear_history",
        )],
        vec![InlineKeyboardButton::callback("↩️ Back", "back")],
    ])
}
