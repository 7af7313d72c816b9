//! Student Profile
//!
//! The academic attributes collected by the questionnaire. Every field is
//! optional: the user may skip any step, and the prompt builder renders unset
//! fields with an explicit placeholder instead of omitting them.

use serde::{Deserialize, Serialize};

/// One collectable profile attribute, in questionnaire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Gpa,
    Country,
    Sat,
    Ielts,
    AdditionalInfo,
}

/// Collected academic profile for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub gpa: Option<String>,
    pub country: Option<String>,
    pub sat: Option<String>,
    pub ielts: Option<String>,
    pub additional_info: Option<String>,
}

impl StudentProfile {
    /// Store a collected value into the given field.
    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Gpa => self.gpa = Some(value),
            ProfileField::Country => self.country = Some(value),
            ProfileField::Sat => self.sat = Some(value),
            ProfileField::Ielts => self.ielts = Some(value),
            ProfileField::AdditionalInfo => self.additional_info = Some(value),
        }
    }

    /// Number of fields that were actually filled in.
    pub fn filled_count(&self) -> usize {
        [
            &self.gpa,
            &self.country,
            &self.sat,
            &self.ielts,
            &self.additional_info,
        ]
        .iter()
        .filter(|f| f.is_some())
        .count()
    }
}
