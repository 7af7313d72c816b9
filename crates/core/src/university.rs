//! University Records
//!
//! Structured data for one candidate institution, mirroring the JSON shape
//! the matching prompt demands from the model. Nested objects are explicit
//! structs with required fields; a record that fails to deserialize is
//! skipped at the catalog boundary rather than patched up.

use serde::{Deserialize, Serialize};

/// Admission requirements and the paperwork that goes with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    pub gpa: String,
    pub sat: String,
    pub ielts: String,
    pub documents: String,
    pub additional: String,
}

/// Application deadlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deadlines {
    pub early: String,
    pub regular: String,
    pub rolling: String,
}

/// Yearly tuition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuition {
    pub amount: String,
    pub currency: String,
}

/// Scholarship kinds, amounts, and eligibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scholarships {
    pub types: Vec<String>,
    pub amounts: Vec<String>,
    pub requirements: String,
}

/// One candidate university proposed by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversityRecord {
    pub name: String,
    pub description: String,
    pub requirements: Requirements,
    pub deadlines: Deadlines,
    pub tuition: Tuition,
    #[serde(default)]
    pub programs: Vec<String>,
    pub scholarships: Scholarships,
}
