//! Integration Tests Module
//!
//! End-to-end tests for the advisor pipeline: the questionnaire dialogue,
//! the matching pipeline against a scripted model, and image resolution.

// Questionnaire and session lifecycle tests
mod dialogue_test;

// Matching and question-answering pipeline tests
mod matching_test;

// Image resolver fallback tests
mod images_test;
