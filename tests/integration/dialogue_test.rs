//! Questionnaire and session lifecycle tests.

use uni_advisor_core::{
    university_id, Answer, AnswerOutcome, BackOutcome, Catalog, DialogueState, Session,
};

fn record_value(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "description": "desc",
        "requirements": {
            "gpa": "3.0", "sat": "1200", "ielts": "6.5",
            "documents": "Transcript", "additional": "None"
        },
        "deadlines": { "early": "Nov 1", "regular": "Jan 15", "rolling": "Yes" },
        "tuition": { "amount": "20000", "currency": "USD" },
        "programs": ["CS"],
        "scholarships": {
            "types": ["Merit"], "amounts": ["5000"], "requirements": "GPA 3.5"
        }
    })
}

#[test]
fn test_full_conversation_lifecycle() {
    let mut session = Session::new();
    assert_eq!(session.state, DialogueState::CollectGpa);

    // Questionnaire: two answers, one skip, one answer, one skip.
    assert!(matches!(
        session.answer(Answer::Text("3.8".to_string())),
        AnswerOutcome::AskNext(_)
    ));
    session.answer(Answer::Text("Canada".to_string()));
    session.answer(Answer::Skip);
    session.answer(Answer::Text("7.0".to_string()));
    assert_eq!(session.answer(Answer::Skip), AnswerOutcome::StartMatching);
    assert_eq!(session.state, DialogueState::Matching);

    // Matching done: catalog installed, browsing begins.
    let catalog = Catalog::populate(&[record_value("Alpha"), record_value("Beta")]);
    session.install_catalog(catalog);
    assert_eq!(session.state, DialogueState::Browsing);
    assert_eq!(session.catalog.len(), 2);

    // Ask a question about Beta.
    let id = university_id("Beta");
    let record = session.select_for_question(&id).unwrap();
    assert_eq!(record.name, "Beta");
    assert_eq!(session.state, DialogueState::Question);
    session.question_answered("Beta", "Is housing guaranteed?");
    assert_eq!(session.state, DialogueState::Browsing);
    assert_eq!(
        session.history.questions_for("Beta"),
        &["Is housing guaranteed?".to_string()]
    );

    // Back keeps browsing while the catalog is alive.
    assert_eq!(session.back(), BackOutcome::ShowOverview);
}

#[test]
fn test_exactly_five_inputs_reach_matching() {
    let mut session = Session::new();
    let mut inputs = 0;
    loop {
        inputs += 1;
        match session.answer(Answer::Skip) {
            AnswerOutcome::AskNext(prompt) => assert!(!prompt.is_empty()),
            AnswerOutcome::StartMatching => break,
            AnswerOutcome::Ignored => panic!("collection ended prematurely"),
        }
    }
    assert_eq!(inputs, 5);
    assert_eq!(session.profile.filled_count(), 0);
}

#[test]
fn test_back_after_restart_terminates_session() {
    let mut session = Session::new();
    session.install_catalog(Catalog::populate(&[record_value("Alpha")]));
    assert_eq!(session.back(), BackOutcome::ShowOverview);

    session.restart();
    assert_eq!(session.back(), BackOutcome::SessionEnded);
}

#[test]
fn test_restart_is_valid_in_every_state() {
    let mut session = Session::new();
    session.answer(Answer::Text("3.0".to_string()));
    session.restart();
    assert_eq!(session.state, DialogueState::CollectGpa);

    session.install_catalog(Catalog::populate(&[record_value("Alpha")]));
    session.select_for_question(&university_id("Alpha")).unwrap();
    session.restart();
    assert_eq!(session.state, DialogueState::CollectGpa);
    assert!(session.selected.is_none());
}
