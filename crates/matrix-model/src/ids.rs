#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Opaque record identifier.
///
/// Stable across re-fetches of the same upstream record. Unique within one
/// category's sequence only: a record listed under several categories keeps
/// the same id in each.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::BlankRecordId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Positional id for a record that arrived without one.
    pub fn synthesized(category: &str, index: usize) -> Self {
        Self(format!("{}#{index}", category.trim()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
