//! Grouped dataset produced by one successful fetch.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::Organization;

/// Mapping from category name to the records grouped under it.
///
/// Built once per fetch and never mutated afterwards; a re-fetch produces a
/// new store that replaces the old one wholesale. Every record held under a
/// category has `category` equal to that key, and no category holds an empty
/// sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordStore {
    groups: BTreeMap<String, Vec<Organization>>,
}

impl RecordStore {
    /// Build a store from grouped records.
    ///
    /// Each record's `category` is rewritten to the key it is grouped under,
    /// and empty groups are discarded.
    pub fn from_groups<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Organization>)>,
    {
        let mut map: BTreeMap<String, Vec<Organization>> = BTreeMap::new();
        for (category, records) in groups {
            if records.is_empty() {
                continue;
            }
            let entry = map.entry(category.clone()).or_default();
            entry.extend(records.into_iter().map(|mut record| {
                record.category.clone_from(&category);
                record
            }));
        }
        Self { groups: map }
    }

    /// Records grouped under `category`, in source order.
    pub fn get(&self, category: &str) -> Option<&[Organization]> {
        self.groups.get(category).map(Vec::as_slice)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.groups.contains_key(category)
    }

    /// Category keys present in the store (lexicographic).
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn category_count(&self) -> usize {
        self.groups.len()
    }

    /// Total grouped entries; a record listed under two categories counts twice.
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Display order of the categories present in a [`RecordStore`].
///
/// Contains every category key of the store it was resolved against, each
/// exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryOrder(Vec<String>);

impl CategoryOrder {
    /// Wrap an already-resolved order.
    pub fn new(categories: Vec<String>) -> Self {
        Self(categories)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.iter().any(|c| c == category)
    }

    pub fn position(&self, category: &str) -> Option<usize> {
        self.0.iter().position(|c| c == category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
