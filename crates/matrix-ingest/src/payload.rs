//! Payload shapes accepted from a data provider.
//!
//! Providers answer either with records already grouped by category or with
//! a flat list whose records carry a `category` field. The shape is decided
//! once, here, and normalized into a [`RecordStore`].

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

use matrix_model::{Organization, RecordStore, UNCATEGORIZED};

use crate::error::{FetchError, IngestError};
use crate::raw::{RawRecord, text, value_kind};
use crate::tabular::{FieldMapping, is_tabular_response, reshape_tabular};

/// Records grouped by category, groups in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedRecords {
    groups: Vec<(String, Vec<RawRecord>)>,
    index: BTreeMap<String, usize>,
}

impl GroupedRecords {
    /// Append `record` to `category`, creating the group on first use.
    pub fn push(&mut self, category: &str, record: RawRecord) {
        let slot = match self.index.get(category) {
            Some(slot) => *slot,
            None => {
                self.groups.push((category.to_string(), Vec::new()));
                let slot = self.groups.len() - 1;
                self.index.insert(category.to_string(), slot);
                slot
            }
        };
        self.groups[slot].1.push(record);
    }

    /// Append a whole group, merging into an existing one of the same name.
    pub fn extend_group(&mut self, category: &str, records: Vec<RawRecord>) {
        if records.is_empty() {
            debug!(category, "dropping empty category group");
            return;
        }
        for record in records {
            self.push(category, record);
        }
    }

    pub fn get(&self, category: &str) -> Option<&[RawRecord]> {
        self.index
            .get(category)
            .map(|slot| self.groups[*slot].1.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(category, _)| category.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn into_groups(self) -> Vec<(String, Vec<RawRecord>)> {
        self.groups
    }
}

/// A provider response, resolved to one of the two supported shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawPayload {
    /// Records each carrying their own `category`.
    Flat(Vec<RawRecord>),
    /// Records already grouped under category keys.
    Grouped(GroupedRecords),
}

impl RawPayload {
    /// Classify a decoded JSON response.
    ///
    /// Accepted, in order of precedence for objects:
    /// - `{"error": "...", "message": "..."}` proxy failure envelope
    /// - `{"records": [...]}` raw tabular response (reshaped with `fields`)
    /// - `{"data": ...}` proxy success envelope (unwrapped once)
    /// - any other object: category name to array of records
    ///
    /// A top-level array is a flat payload.
    pub fn from_json(value: &Value, fields: &FieldMapping) -> Result<Self, FetchError> {
        Self::classify(value, fields, true)
    }

    fn classify(value: &Value, fields: &FieldMapping, unwrap: bool) -> Result<Self, FetchError> {
        match value {
            Value::Array(items) => Ok(Self::Flat(
                items.iter().filter_map(RawRecord::from_value).collect(),
            )),
            Value::Object(object) => {
                if let Some(error) = object.get("error") {
                    return Err(envelope_error(error, object.get("message")));
                }
                if is_tabular_response(value) {
                    return reshape_tabular(value, fields).map(Self::Grouped);
                }
                if unwrap && let Some(data) = object.get("data") {
                    return Self::classify(data, fields, false);
                }
                let mut grouped = GroupedRecords::default();
                for (category, records) in object {
                    let Some(items) = records.as_array() else {
                        return Err(IngestError::shape(format!(
                            "category {category:?} holds {} instead of an array",
                            value_kind(records)
                        ))
                        .into());
                    };
                    grouped.extend_group(
                        category,
                        items.iter().filter_map(RawRecord::from_value).collect(),
                    );
                }
                Ok(Self::Grouped(grouped))
            }
            other => Err(IngestError::shape(format!(
                "expected an object or array, found {}",
                value_kind(other)
            ))
            .into()),
        }
    }

    /// Normalize into the canonical grouped store, applying record defaults.
    ///
    /// Flat records are grouped by their `category` field, first-seen order,
    /// falling back to [`UNCATEGORIZED`]. Grouped records take the category
    /// of the key they are listed under.
    pub fn into_store(self) -> RecordStore {
        let grouped = match self {
            Self::Grouped(grouped) => grouped,
            Self::Flat(records) => {
                let mut grouped = GroupedRecords::default();
                for record in records {
                    let category = record
                        .category
                        .clone()
                        .unwrap_or_else(|| UNCATEGORIZED.to_string());
                    grouped.push(&category, record);
                }
                grouped
            }
        };
        RecordStore::from_groups(grouped.into_groups().into_iter().map(
            |(category, records)| {
                let organizations: Vec<Organization> = records
                    .into_iter()
                    .enumerate()
                    .map(|(index, record)| record.into_organization(&category, index))
                    .collect();
                (category, organizations)
            },
        ))
    }
}

fn envelope_error(error: &Value, message: Option<&Value>) -> FetchError {
    let summary = text(error).unwrap_or_else(|| "Failed to fetch organization data".to_string());
    match message.and_then(text) {
        Some(detail) if detail != summary => {
            warn!(%summary, %detail, "provider returned an error envelope");
            FetchError::new(format!("{summary}: {detail}"))
        }
        _ => FetchError::new(summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Result<RawPayload, FetchError> {
        RawPayload::from_json(&value, &FieldMapping::default())
    }

    #[test]
    fn flat_payload_groups_by_category_first_seen() {
        let payload = parse(json!([
            {"_id": "1", "name": "A", "category": "Law Firms"},
            {"_id": "2", "name": "B", "category": "Contractors"},
            {"_id": "3", "name": "C", "category": "Law Firms"},
            {"_id": "4", "name": "D"}
        ]))
        .unwrap();
        assert!(matches!(payload, RawPayload::Flat(_)));
        let store = payload.into_store();
        let law: Vec<&str> = store
            .get("Law Firms")
            .unwrap()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(law, vec!["1", "3"]);
        assert_eq!(store.get(UNCATEGORIZED).unwrap()[0].name, "D");
    }

    #[test]
    fn grouped_payload_overrides_record_category() {
        let store = parse(json!({
            "Law Firms": [{"_id": "1", "name": "A", "category": "Something Else"}],
            "Empty": []
        }))
        .unwrap()
        .into_store();
        assert_eq!(store.get("Law Firms").unwrap()[0].category, "Law Firms");
        assert!(!store.contains_category("Empty"));
    }

    #[test]
    fn data_envelope_is_unwrapped_once() {
        let store = parse(json!({"data": {"Consultants": [{"_id": "9"}]}}))
            .unwrap()
            .into_store();
        assert_eq!(store.record_count(), 1);

        // A nested `data` key is an ordinary category.
        let error = parse(json!({"data": {"data": {"x": 1}}})).unwrap_err();
        assert!(error.message().contains("instead of an array"));
    }

    #[test]
    fn error_envelope_becomes_fetch_error() {
        let error = parse(json!({"error": "Not found", "message": "table missing"})).unwrap_err();
        assert_eq!(error.message(), "Not found: table missing");

        let error = parse(json!({"error": "Rate limit exceeded"})).unwrap_err();
        assert_eq!(error.message(), "Rate limit exceeded");
    }

    #[test]
    fn rejects_scalars_and_malformed_groups() {
        assert!(parse(json!("nope")).is_err());
        assert!(parse(json!({"Law Firms": {"name": "A"}})).is_err());
    }

    #[test]
    fn skips_non_object_records() {
        let store = parse(json!({"Law Firms": ["junk", {"_id": "1"}]}))
            .unwrap()
            .into_store();
        let records = store.get("Law Firms").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_str(), "1");
    }
}
