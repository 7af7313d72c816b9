//! Bot Service
//!
//! Telegram wiring: receives messages and callback queries, drives the
//! session's dialogue state machine, and renders views back into the chat.
//! Handling within one chat is sequential; sessions for different chats are
//! independent entries in the shared map.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, InputFile, ParseMode};
use tokio::sync::Mutex;
use tracing::{info, warn};

use uni_advisor_core::{
    university_id, Answer, AnswerOutcome, BackOutcome, DialogueState, Session, StudentProfile,
    UniversityRecord,
};
use uni_advisor_llm::TextProvider;

use super::images::ImageResolver;
use super::matching;
use super::router::CallbackAction;
use super::views::{self, DetailView};

/// Pacing delay between successive overview cards, to stay under the
/// transport's rate limits.
const CARD_PACING: Duration = Duration::from_secs(1);

/// Shared state for all chats.
pub struct BotContext {
    pub sessions: Mutex<HashMap<ChatId, Session>>,
    pub model: Arc<dyn TextProvider>,
    pub images: ImageResolver,
}

impl BotContext {
    pub fn new(model: Arc<dyn TextProvider>, images: ImageResolver) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            model,
            images,
        }
    }
}

/// Run the dispatcher until the process is stopped.
pub async fn run(bot: Bot, ctx: Arc<BotContext>) {
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    info!(model = ctx.model.name(), "starting dispatcher");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![ctx])
        .default_handler(|_| async {})
        .error_handler(LoggingErrorHandler::with_custom_text("handler error"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

/// What a message handler decided to do, resolved under the session lock so
/// no external call ever runs while the lock is held.
enum MessageStep {
    Reply(&'static str),
    RunMatching(StudentProfile),
    AskModel(UniversityRecord, String),
}

async fn handle_message(bot: Bot, msg: Message, ctx: Arc<BotContext>) -> anyhow::Result<()> {
    let chat_id = msg.chat.id;
    let text = match msg.text() {
        Some(text) => text.trim().to_string(),
        None => return Ok(()),
    };

    if text == "/start" {
        let greeting = {
            let mut sessions = ctx.sessions.lock().await;
            sessions.entry(chat_id).or_insert_with(Session::new).restart()
        };
        bot.send_message(chat_id, greeting).await?;
        return Ok(());
    }

    let step = {
        let mut sessions = ctx.sessions.lock().await;
        let session = match sessions.get_mut(&chat_id) {
            Some(session) => session,
            None => {
                drop(sessions);
                bot.send_message(chat_id, views::MSG_NEED_START).await?;
                return Ok(());
            }
        };
        match session.state {
            DialogueState::Question => match session.selected.clone() {
                Some(record) => MessageStep::AskModel(record, text),
                None => {
                    session.state = DialogueState::Browsing;
                    MessageStep::Reply(views::MSG_NOT_FOUND)
                }
            },
            DialogueState::Matching => MessageStep::Reply(views::MSG_MATCHING_IN_PROGRESS),
            DialogueState::Browsing => MessageStep::Reply(views::MSG_USE_BUTTONS),
            _ => {
                // Collection states.
                let answer = if text == "/skip" {
                    Answer::Skip
                } else if text.starts_with('/') {
                    drop(sessions);
                    bot.send_message(chat_id, "Send your answer as text, or /skip this step.")
                        .await?;
                    return Ok(());
                } else {
                    Answer::Text(text)
                };
                match session.answer(answer) {
                    AnswerOutcome::AskNext(prompt) => MessageStep::Reply(prompt),
                    AnswerOutcome::StartMatching => {
                        MessageStep::RunMatching(session.profile.clone())
                    }
                    AnswerOutcome::Ignored => MessageStep::Reply(views::MSG_USE_BUTTONS),
                }
            }
        }
    };

    match step {
        MessageStep::Reply(reply) => {
            bot.send_message(chat_id, reply).await?;
        }
        MessageStep::RunMatching(profile) => {
            run_matching(&bot, chat_id, &ctx, &profile).await?;
        }
        MessageStep::AskModel(record, question) => {
            run_question(&bot, chat_id, &ctx, record, question).await?;
        }
    }
    Ok(())
}

async fn run_matching(
    bot: &Bot,
    chat_id: ChatId,
    ctx: &Arc<BotContext>,
    profile: &StudentProfile,
) -> anyhow::Result<()> {
    let loading = bot
        .send_message(chat_id, views::MSG_ANALYZING)
        .parse_mode(ParseMode::Markdown)
        .await?;
    let _ = bot.send_chat_action(chat_id, ChatAction::Typing).await;

    match matching::match_universities(ctx.model.as_ref(), profile).await {
        Ok(catalog) => {
            let _ = bot.delete_message(chat_id, loading.id).await;
            bot.send_message(chat_id, views::MSG_FOUND_HEADER)
                .parse_mode(ParseMode::Markdown)
                .await?;
            let entries: Vec<(String, UniversityRecord)> = catalog
                .iter()
                .map(|(id, record)| (id.to_string(), record.clone()))
                .collect();
            {
                let mut sessions = ctx.sessions.lock().await;
                if let Some(session) = sessions.get_mut(&chat_id) {
                    session.install_catalog(catalog);
                }
            }
            send_overview(bot, chat_id, ctx, &entries).await?;
        }
        Err(e) => {
            // Fatal for the conversation: the user must /start again.
            warn!(error = %e, "matching failed");
            let _ = bot.delete_message(chat_id, loading.id).await;
            ctx.sessions.lock().await.remove(&chat_id);
            bot.send_message(chat_id, views::MSG_MATCH_FAILED).await?;
        }
    }
    Ok(())
}

/// Send one photo card per catalog entry, in insertion order, with pacing.
async fn send_overview(
    bot: &Bot,
    chat_id: ChatId,
    ctx: &Arc<BotContext>,
    entries: &[(String, UniversityRecord)],
) -> anyhow::Result<()> {
    for (id, record) in entries {
        let caption = views::card_text(record);
        let keyboard = views::card_keyboard(id);
        let photo = ctx.images.resolve(&record.name).await;
        let sent = bot
            .send_photo(chat_id, InputFile::memory(photo).file_name("campus.jpg"))
            .caption(caption.clone())
            .parse_mode(ParseMode::Markdown)
            .reply_markup(keyboard.clone())
            .await;
        if let Err(e) = sent {
            warn!(university = %record.name, error = %e, "photo send failed, sending text card");
            bot.send_message(chat_id, caption)
                .parse_mode(ParseMode::Markdown)
                .reply_markup(keyboard)
                .await?;
        }
        tokio::time::sleep(CARD_PACING).await;
    }
    bot.send_message(chat_id, views::MSG_PICK_FOOTER)
        .parse_mode(ParseMode::Markdown)
        .reply_markup(views::restart_keyboard())
        .await?;
    Ok(())
}

async fn run_question(
    bot: &Bot,
    chat_id: ChatId,
    ctx: &Arc<BotContext>,
    record: UniversityRecord,
    question: String,
) -> anyhow::Result<()> {
    let loading = bot
        .send_message(chat_id, views::MSG_THINKING)
        .parse_mode(ParseMode::Markdown)
        .await?;
    let _ = bot.send_chat_action(chat_id, ChatAction::Typing).await;

    let id = university_id(&record.name);
    match matching::answer_question(ctx.model.as_ref(), &record, &question).await {
        Ok(answer) => {
            let _ = bot.delete_message(chat_id, loading.id).await;
            {
                let mut sessions = ctx.sessions.lock().await;
                if let Some(session) = sessions.get_mut(&chat_id) {
                    session.question_answered(&record.name, &question);
                }
            }
            bot.send_message(chat_id, views::answer_text(&record.name, &answer))
                .parse_mode(ParseMode::Markdown)
                .reply_markup(views::question_reply_keyboard(&id))
                .await?;
        }
        Err(e) => {
            // Recoverable: stay in question mode so the user can rephrase.
            warn!(error = %e, university = %record.name, "question answering failed");
            let _ = bot.delete_message(chat_id, loading.id).await;
            bot.send_message(chat_id, views::MSG_QUESTION_FAILED)
                .parse_mode(ParseMode::Markdown)
                .reply_markup(views::question_retry_keyboard(&id))
                .await?;
        }
    }
    Ok(())
}

async fn handle_callback(bot: Bot, q: CallbackQuery, ctx: Arc<BotContext>) -> anyhow::Result<()> {
    bot.answer_callback_query(q.id.clone()).await?;

    let chat_id = match &q.message {
        Some(message) => message.chat().id,
        None => return Ok(()),
    };
    let action = match q.data.as_deref().and_then(CallbackAction::parse) {
        Some(action) => action,
        None => return Ok(()),
    };

    match action {
        CallbackAction::Restart => {
            {
                let mut sessions = ctx.sessions.lock().await;
                sessions.entry(chat_id).or_insert_with(Session::new).restart();
            }
            bot.send_message(chat_id, views::MSG_RESTART).await?;
        }
        CallbackAction::Back => {
            let entries: Option<Vec<(String, UniversityRecord)>> = {
                let mut sessions = ctx.sessions.lock().await;
                sessions.get_mut(&chat_id).and_then(|session| {
                    match session.back() {
                        BackOutcome::ShowOverview => Some(
                            session
                                .catalog
                                .iter()
                                .map(|(id, record)| (id.to_string(), record.clone()))
                                .collect(),
                        ),
                        BackOutcome::SessionEnded => None,
                    }
                })
            };
            match entries {
                Some(entries) => {
                    bot.send_message(chat_id, views::MSG_PICK_HEADER)
                        .parse_mode(ParseMode::Markdown)
                        .await?;
                    send_overview(&bot, chat_id, &ctx, &entries).await?;
                }
                None => {
                    ctx.sessions.lock().await.remove(&chat_id);
                    bot.send_message(chat_id, views::MSG_SESSION_ENDED).await?;
                }
            }
        }
        CallbackAction::Requirements(id) => {
            send_detail(&bot, chat_id, &ctx, &id, DetailView::Requirements).await?;
        }
        CallbackAction::Scholarships(id) => {
            send_detail(&bot, chat_id, &ctx, &id, DetailView::Scholarships).await?;
        }
        CallbackAction::Detail(id) => {
            send_detail(&bot, chat_id, &ctx, &id, DetailView::Full).await?;
        }
        CallbackAction::Question(id) => {
            let selected = {
                let mut sessions = ctx.sessions.lock().await;
                sessions
                    .get_mut(&chat_id)
                    .and_then(|session| session.select_for_question(&id))
            };
            match selected {
                Some(record) => {
                    bot.send_message(chat_id, views::ask_prompt(&record.name))
                        .parse_mode(ParseMode::Markdown)
                        .await?;
                }
                None => {
                    bot.send_message(chat_id, views::MSG_NOT_FOUND).await?;
                }
            }
        }
        CallbackAction::History => {
            let snapshot = {
                let sessions = ctx.sessions.lock().await;
                sessions.get(&chat_id).and_then(|session| {
                    session.selected.as_ref().map(|record| {
                        (
                            record.name.clone(),
                            session.history.questions_for(&record.name).to_vec(),
                        )
                    })
                })
            };
            match snapshot {
                Some((name, questions)) if !questions.is_empty() => {
                    let id = university_id(&name);
                    bot.send_message(chat_id, views::history_text(&name, &questions))
                        .parse_mode(ParseMode::Markdown)
                        .reply_markup(views::history_keyboard(&id))
                        .await?;
                }
                Some(_) => {
                    bot.send_message(chat_id, views::MSG_HISTORY_EMPTY)
                        .reply_markup(views::back_keyboard())
                        .await?;
                }
                None => {
                    bot.send_message(chat_id, views::MSG_NOT_FOUND).await?;
                }
            }
        }
        CallbackAction::ClearHistory => {
            let cleared = {
                let mut sessions = ctx.sessions.lock().await;
                sessions.get_mut(&chat_id).is_some_and(|session| {
                    let name = session.selected.as_ref().map(|r| r.name.clone());
                    match name {
                        Some(name) => {
                            session.history.clear(&name);
                            true
                        }
                        None => false,
                    }
                })
            };
            if cleared {
                bot.send_message(chat_id, views::MSG_HISTORY_CLEARED)
                    .reply_markup(views::back_keyboard())
                    .await?;
            } else {
                bot.send_message(chat_id, views::MSG_NOT_FOUND).await?;
            }
        }
    }
    Ok(())
}

/// Render one focused sub-view for a catalog entry.
async fn send_detail(
    bot: &Bot,
    chat_id: ChatId,
    ctx: &Arc<BotContext>,
    id: &str,
    view: DetailView,
) -> anyhow::Result<()> {
    let record = {
        let sessions = ctx.sessions.lock().await;
        sessions
            .get(&chat_id)
            .and_then(|session| session.catalog.lookup(id).cloned())
    };
    match record {
        Some(record) => {
            bot.send_message(chat_id, views::render_detail(view, &record))
                .parse_mode(ParseMode::Markdown)
                .reply_markup(views::back_keyboard())
                .await?;
        }
        None => {
            // Stale or unknown id, e.g. a button from before a restart.
            bot.send_message(chat_id, views::MSG_NOT_FOUND).await?;
        }
    }
    Ok(())
}
