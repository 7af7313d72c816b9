//! Prompt Builder
//!
//! Renders the collected profile or a selected record into instructions for
//! the generative model. Pure functions of their inputs; no I/O. Unset
//! profile fields render as an explicit placeholder so the model always sees
//! a complete template.

use crate::error::AdvisorResult;
use crate::profile::StudentProfile;
use crate::university::UniversityRecord;

/// Placeholder used for profile fields the user skipped.
pub const NOT_SPECIFIED: &str = "not specified";

fn field_or_placeholder(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NOT_SPECIFIED)
}

/// Build the matching prompt for a collected profile.
///
/// Asks for exactly three real universities, pins the JSON shape verbatim,
/// and forbids prose outside the JSON.
pub fn matching_prompt(profile: &StudentProfile) -> String {
    let location_clause = match &profile.country {
        Some(country) => format!(" located in {}", country),
        None => String::new(),
    };
    format!(
        r#"Based on the student data below, produce JSON strictly in the following format, describing three suitable universities{location_clause}.
Important: pick only real, existing universities in the given country/city.

{{
    "universities": [
        {{
            "name": "University name",
            "description": "University description",
            "requirements": {{
                "gpa": "3.0",
                "sat": "1200",
                "ielts": "6.5",
                "documents": "List of documents",
                "additional": "Additional requirements"
            }},
            "deadlines": {{
                "early": "Date",
                "regular": "Date",
                "rolling": "Yes/No"
            }},
            "tuition": {{
                "amount": "10000",
                "currency": "USD"
            }},
            "programs": [
                "Program 1",
                "Program 2",
                "Program 3"
            ],
            "scholarships": {{
                "types": [
                    "Scholarship 1",
                    "Scholarship 2"
                ],
                "amounts": [
                    "Amount 1",
                    "Amount 2"
                ],
                "requirements": "Scholarship requirements"
            }}
        }}
    ]
}}

Student data:
GPA: {gpa}
Country/City: {country}
SAT: {sat}
IELTS: {ielts}
Additional information: {additional}

Return only the JSON, with no extra text."#,
        location_clause = location_clause,
        gpa = field_or_placeholder(&profile.gpa),
        country = field_or_placeholder(&profile.country),
        sat = field_or_placeholder(&profile.sat),
        ielts = field_or_placeholder(&profile.ielts),
        additional = field_or_placeholder(&profile.additional_info),
    )
}

/// Build the follow-up question prompt for a selected university.
///
/// The full record is serialized into the prompt as context so the answer
/// can reference concrete facts and figures.
pub fn question_prompt(record: &UniversityRecord, question: &str) -> AdvisorResult<String> {
    let context = serde_json::to_string_pretty(record)?;
    Ok(format!(
        "Question about the university {name}:\n\
         {question}\n\n\
         Context about the university:\n\
         {context}\n\n\
         Give the most detailed and useful answer you can to the student's question,\n\
         including concrete facts, figures, and recommendations where relevant.",
        name = record.name,
        question = question,
        context = context,
    ))
}
