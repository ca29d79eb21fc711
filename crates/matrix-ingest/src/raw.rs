//! Lenient record extraction.
//!
//! Upstream records are loosely typed: fields go missing, change type, or
//! arrive blank. Nothing here fails. Each field is read if it has a usable
//! shape and otherwise left absent, so that [`RawRecord::into_organization`]
//! can apply the record defaults.

use serde_json::{Map, Value};
use tracing::warn;

use matrix_model::{Organization, PLACEHOLDER_LOGO_URL, RecordId, UNKNOWN_NAME};

/// A record as received, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub verified: Option<bool>,
    pub states: Option<Vec<String>>,
    pub contact_info: Option<String>,
    pub website_url: Option<String>,
    pub category: Option<String>,
    pub all_categories: Option<Vec<String>>,
}

impl RawRecord {
    /// Read an app-shaped record object (`_id`/`id`, camelCase or snake_case keys).
    ///
    /// Returns `None` for values that are not objects.
    pub fn from_value(value: &Value) -> Option<Self> {
        let Some(object) = value.as_object() else {
            warn!(kind = value_kind(value), "skipping non-object record");
            return None;
        };
        Some(Self {
            id: lookup(object, &["_id", "id"]).and_then(id_text),
            name: lookup(object, &["name"]).and_then(text),
            logo_url: lookup(object, &["logoUrl", "logo_url"]).and_then(text),
            verified: lookup(object, &["verified"]).and_then(flag),
            states: lookup(object, &["states"]).map(text_list),
            contact_info: lookup(object, &["contactInfo", "contact_info"]).and_then(text),
            website_url: lookup(object, &["websiteUrl", "website_url"]).and_then(text),
            category: lookup(object, &["category"]).and_then(text),
            all_categories: lookup(object, &["allCategories", "all_categories"]).map(text_list),
        })
    }

    /// Resolve defaults for a record grouped under `category`.
    ///
    /// `index` is the record's position within its group and only feeds the
    /// synthesized id of records that arrive without one.
    pub fn into_organization(self, category: &str, index: usize) -> Organization {
        let id = self
            .id
            .and_then(|id| RecordId::new(id).ok())
            .unwrap_or_else(|| RecordId::synthesized(category, index));
        Organization {
            id,
            name: self.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            logo_url: self
                .logo_url
                .unwrap_or_else(|| PLACEHOLDER_LOGO_URL.to_string()),
            verified: self.verified.unwrap_or(false),
            states: self.states.unwrap_or_default(),
            contact_info: self.contact_info,
            website_url: self.website_url,
            category: category.to_string(),
            all_categories: self.all_categories,
        }
    }
}

pub(crate) fn lookup<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| object.get(*key))
        .filter(|value| !value.is_null())
}

/// Non-blank string, trimmed.
pub(crate) fn text(value: &Value) -> Option<String> {
    let trimmed = value.as_str()?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Identifiers may arrive as strings or numbers.
pub(crate) fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => Some(number.to_string()),
        other => text(other),
    }
}

/// An array of strings or a single string; other entries are dropped.
pub(crate) fn text_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(text).collect(),
        other => text(other).into_iter().collect(),
    }
}

pub(crate) fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => number.as_f64().map(|n| n != 0.0),
        Value::String(raw) => match raw.trim().to_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Some(true),
            "false" | "no" | "n" | "0" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
