//! University Catalog
//!
//! Session-scoped mapping from identifier to university record, built once
//! from the parsed matching response. Lookup is by id; iteration preserves
//! the model's returned order for the overview listing.

use crate::error::{AdvisorError, AdvisorResult};
use crate::ident::university_id;
use crate::university::UniversityRecord;
use tracing::warn;

/// The matched universities for one session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<(String, UniversityRecord)>,
}

impl Catalog {
    /// Build a catalog from raw record values.
    ///
    /// Each value is deserialized into a [`UniversityRecord`]; entries that
    /// are malformed, have an empty name, or collide on id with an earlier
    /// entry are logged and skipped. Only a total absence of valid records
    /// is the caller's problem.
    pub fn populate(values: &[serde_json::Value]) -> Catalog {
        let mut entries: Vec<(String, UniversityRecord)> = Vec::with_capacity(values.len());
        for value in values {
            let record: UniversityRecord = match serde_json::from_value(value.clone()) {
                Ok(record) => record,
                Err(e) => {
                    warn!(error = %e, "skipping malformed university record");
                    continue;
                }
            };
            if record.name.trim().is_empty() {
                warn!("skipping university record with empty name");
                continue;
            }
            let id = university_id(&record.name);
            if entries.iter().any(|(existing, _)| *existing == id) {
                warn!(id = %id, name = %record.name, "skipping duplicate university id");
                continue;
            }
            entries.push((id, record));
        }
        Catalog { entries }
    }

    /// Build a catalog from a parsed matching response.
    ///
    /// A missing `universities` key or an empty list is `NoResults`, distinct
    /// from the parse failures raised earlier in the pipeline.
    pub fn from_response(response: &serde_json::Value) -> AdvisorResult<Catalog> {
        let values = match response.get("universities").and_then(|v| v.as_array()) {
            Some(list) if !list.is_empty() => list,
            _ => return Err(AdvisorError::NoResults),
        };
        let catalog = Catalog::populate(values);
        if catalog.is_empty() {
            return Err(AdvisorError::NoResults);
        }
        Ok(catalog)
    }

    /// Look up a record by its identifier.
    pub fn lookup(&self, id: &str) -> Option<&UniversityRecord> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, record)| record)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UniversityRecord)> {
        self.entries.iter().map(|(id, record)| (id.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
