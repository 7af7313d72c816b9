//! Matching pipeline tests against a scripted provider.

use std::sync::Mutex;

use async_trait::async_trait;
use uni_advisor_bot::services::matching::{answer_question, match_universities, MatchingError};
use uni_advisor_core::{university_id, AdvisorError, Answer, Session, StudentProfile};
use uni_advisor_llm::{LlmError, LlmResult, TextProvider};

/// Provider that replays a canned response and records every prompt.
struct ScriptedProvider {
    response: Result<String, LlmError>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn replying(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn failing(error: LlmError) -> Self {
        Self {
            response: Err(error),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn generate(&self, prompt: &str) -> LlmResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.response.clone()
    }
}

fn record_json(name: &str) -> String {
    format!(
        r#"{{
            "name": "{name}",
            "description": "A fine school",
            "requirements": {{
                "gpa": "3.5", "sat": "1400", "ielts": "7.0",
                "documents": "Transcript, essays", "additional": "Interview"
            }},
            "deadlines": {{ "early": "Nov 1", "regular": "Jan 5", "rolling": "No" }},
            "tuition": {{ "amount": "55000", "currency": "USD" }},
            "programs": ["CS", "Math"],
            "scholarships": {{
                "types": ["Merit", "Need"], "amounts": ["full", "partial"],
                "requirements": "Separate application"
            }}
        }}"#
    )
}

fn scenario_profile() -> StudentProfile {
    let mut session = Session::new();
    session.answer(Answer::Text("3.8".to_string()));
    session.answer(Answer::Text("Canada".to_string()));
    session.answer(Answer::Skip);
    session.answer(Answer::Text("7.0".to_string()));
    session.answer(Answer::Skip);
    session.profile
}

#[tokio::test]
async fn test_matching_survives_prose_and_fences() {
    let response = format!(
        "Here are my picks:\n```json\n{{\"universities\": [{}, {}, {}]}}\n```\nGood luck!",
        record_json("Alpha University"),
        record_json("Beta College"),
        record_json("Gamma Institute"),
    );
    let model = ScriptedProvider::replying(&response);

    let catalog = match_universities(&model, &scenario_profile()).await.unwrap();
    assert_eq!(catalog.len(), 3);

    // Order preserved and every id is a stable 8-hex handle.
    let names: Vec<&str> = catalog.iter().map(|(_, r)| r.name.as_str()).collect();
    assert_eq!(names, ["Alpha University", "Beta College", "Gamma Institute"]);
    for (id, record) in catalog.iter() {
        assert_eq!(id, &university_id(&record.name));
        assert_eq!(id.len(), 8);
    }
}

#[tokio::test]
async fn test_matching_prompt_carries_profile() {
    let response = format!("{{\"universities\": [{}]}}", record_json("Alpha University"));
    let model = ScriptedProvider::replying(&response);

    match_universities(&model, &scenario_profile()).await.unwrap();

    let prompt = model.last_prompt();
    assert!(prompt.contains("3.8"));
    assert!(prompt.contains("Canada"));
    assert!(prompt.contains("7.0"));
    // Skipped SAT and additional info fall back to the placeholder.
    assert_eq!(prompt.matches("not specified").count(), 2);
}

#[tokio::test]
async fn test_matching_skips_nameless_records() {
    let nameless = record_json("x").replacen("\"name\": \"x\"", "\"name\": \"\"", 1);
    let response = format!(
        "{{\"universities\": [{}, {}, {}, {}]}}",
        record_json("Alpha"),
        nameless,
        record_json("Beta"),
        record_json("Gamma"),
    );
    let model = ScriptedProvider::replying(&response);

    let catalog = match_universities(&model, &scenario_profile()).await.unwrap();
    assert_eq!(catalog.len(), 3);
    assert!(catalog.lookup(&university_id("Alpha")).is_some());
}

#[tokio::test]
async fn test_matching_rejects_malformed_json() {
    let model = ScriptedProvider::replying("{\"universities\": [{ broken");
    let err = match_universities(&model, &scenario_profile())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MatchingError::Advisor(AdvisorError::Parse(_))
    ));
}

#[tokio::test]
async fn test_matching_rejects_empty_results() {
    let model = ScriptedProvider::replying("Sorry, I cannot help with that.");
    let err = match_universities(&model, &scenario_profile())
        .await
        .unwrap_err();
    assert!(matches!(err, MatchingError::Advisor(AdvisorError::NoResults)));
}

#[tokio::test]
async fn test_matching_propagates_model_failure() {
    let model = ScriptedProvider::failing(LlmError::Timeout);
    let err = match_universities(&model, &scenario_profile())
        .await
        .unwrap_err();
    assert!(matches!(err, MatchingError::Model(LlmError::Timeout)));
}

#[tokio::test]
async fn test_answer_question_grounds_prompt_in_record() {
    let response = format!("{{\"universities\": [{}]}}", record_json("Alpha University"));
    let catalog = match_universities(
        &ScriptedProvider::replying(&response),
        &scenario_profile(),
    )
    .await
    .unwrap();
    let (_, record) = catalog.iter().next().unwrap();

    let model = ScriptedProvider::replying("Yes, housing is guaranteed for freshmen.");
    let answer = answer_question(&model, record, "Is housing guaranteed?")
        .await
        .unwrap();
    assert_eq!(answer, "Yes, housing is guaranteed for freshmen.");

    let prompt = model.last_prompt();
    assert!(prompt.contains("Alpha University"));
    assert!(prompt.contains("Is housing guaranteed?"));
    assert!(prompt.contains("55000"));
}
