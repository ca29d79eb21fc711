//! Reshaping of raw tabular-API responses.
//!
//! The hosted table returns `{"records": [{"id": ..., "fields": {...}}]}`
//! with human-named columns. Each record is placed under every value of its
//! multi-select category column, or under [`UNCATEGORIZED`] when it has none.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use matrix_model::UNCATEGORIZED;

use crate::error::FetchError;
use crate::payload::GroupedRecords;
use crate::raw::{RawRecord, flag, id_text, lookup, text, text_list};

/// Column names of the hosted table, keyed by record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMapping {
    pub name: String,
    pub logo_url: String,
    pub verified: String,
    pub states: String,
    pub contact_info: String,
    pub website_url: String,
    /// Multi-select column listing every category of the record.
    pub categories: String,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            logo_url: "LogoURL".to_string(),
            verified: "Verified".to_string(),
            states: "States".to_string(),
            contact_info: "ContactInfo".to_string(),
            website_url: "WebsiteURL".to_string(),
            categories: "Industry category".to_string(),
        }
    }
}

/// Returns true if `value` looks like a raw tabular response.
pub fn is_tabular_response(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|object| object.get("records"))
        .is_some_and(Value::is_array)
}

/// Group a raw tabular response by category.
///
/// Groups keep first-seen order and records keep response order. A record in
/// several categories is duplicated into each, sharing its id.
pub fn reshape_tabular(value: &Value, fields: &FieldMapping) -> Result<GroupedRecords, FetchError> {
    let records = value
        .get("records")
        .and_then(Value::as_array)
        .ok_or_else(|| FetchError::new("tabular response has no records array"))?;

    let mut grouped = GroupedRecords::default();
    for entry in records {
        let Some(record) = entry.as_object() else {
            warn!("skipping non-object tabular record");
            continue;
        };
        let empty = serde_json::Map::new();
        let columns = record
            .get("fields")
            .and_then(Value::as_object)
            .unwrap_or(&empty);
        let mut categories = columns
            .get(fields.categories.as_str())
            .map(text_list)
            .unwrap_or_default();
        let mut seen = BTreeSet::new();
        categories.retain(|category| seen.insert(category.clone()));
        let raw = RawRecord {
            id: lookup(record, &["id"]).and_then(id_text),
            name: columns.get(fields.name.as_str()).and_then(text),
            logo_url: columns.get(fields.logo_url.as_str()).and_then(text),
            verified: columns.get(fields.verified.as_str()).and_then(flag),
            states: columns.get(fields.states.as_str()).map(text_list),
            contact_info: columns.get(fields.contact_info.as_str()).and_then(text),
            website_url: columns.get(fields.website_url.as_str()).and_then(text),
            category: None,
            all_categories: Some(categories.clone()),
        };
        if categories.is_empty() {
            grouped.push(UNCATEGORIZED, raw);
        } else {
            for category in &categories {
                grouped.push(category, raw.clone());
            }
        }
    }

    if grouped.is_empty() {
        return Err(FetchError::new(
            "Could not fetch data: the table returned no records.",
        ));
    }
    debug!(
        records = records.len(),
        categories = grouped.len(),
        "reshaped tabular response"
    );
    Ok(grouped)
}
