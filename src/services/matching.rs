//! Matching Service
//!
//! Bridges the dialogue core and the generative model: builds the prompt,
//! runs the single model call, and turns raw output into a catalog (or an
//! answer string for follow-up questions). Transport-free, so the whole
//! pipeline is testable with a scripted provider.

use thiserror::Error;
use tracing::info;
use uni_advisor_core::{
    matching_prompt, parse_response, question_prompt, AdvisorError, Catalog, StudentProfile,
    UniversityRecord,
};
use uni_advisor_llm::{LlmError, TextProvider};

/// Failures along the prompt -> model -> parse -> catalog pipeline.
#[derive(Debug, Error)]
pub enum MatchingError {
    /// The model call itself failed
    #[error("model call failed: {0}")]
    Model(#[from] LlmError),
    /// The model answered, but the answer was unusable
    #[error(transparent)]
    Advisor(#[from] AdvisorError),
}

/// Run the matching step for a collected profile.
pub async fn match_universities(
    model: &dyn TextProvider,
    profile: &StudentProfile,
) -> Result<Catalog, MatchingError> {
    let prompt = matching_prompt(profile);
    let raw = model.generate(&prompt).await?;
    let response = parse_response(&raw)?;
    let catalog = Catalog::from_response(&response)?;
    info!(count = catalog.len(), "matched universities");
    Ok(catalog)
}

/// Answer a free-form question about one university.
pub async fn answer_question(
    model: &dyn TextProvider,
    record: &UniversityRecord,
    question: &str,
) -> Result<String, MatchingError> {
    let prompt = question_prompt(record, question).map_err(MatchingError::Advisor)?;
    let answer = model.generate(&prompt).await?;
    Ok(answer)
}
