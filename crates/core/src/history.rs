//! Question History
//!
//! Per-university log of the free-form questions asked during a session.
//! Append-only, except for an explicit per-university clear.

use std::collections::HashMap;

/// Questions previously asked, keyed by university name.
#[derive(Debug, Clone, Default)]
pub struct QuestionHistory {
    entries: HashMap<String, Vec<String>>,
}

impl QuestionHistory {
    /// Append a question under the university's name.
    pub fn record(&mut self, university_name: &str, question: &str) {
        self.entries
            .entry(university_name.to_string())
            .or_default()
            .push(question.to_string());
    }

    /// Questions asked about the given university, oldest first.
    pub fn questions_for(&self, university_name: &str) -> &[String] {
        self.entries
            .get(university_name)
            .map(|q| q.as_slice())
            .unwrap_or(&[])
    }

    /// Drop all questions recorded for the given university.
    pub fn clear(&mut self, university_name: &str) {
        self.entries.remove(university_name);
    }
}
