//! Filter and sort parameters of a directory view.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{SortDirection, SortKey};

/// Active filters.
///
/// An empty `categories` set selects nothing; an empty `states` set applies
/// no state narrowing at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub categories: BTreeSet<String>,
    pub states: BTreeSet<String>,
    pub include_national: bool,
    /// Raw search text as typed; see [`FilterState::normalized_search`].
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            categories: BTreeSet::new(),
            states: BTreeSet::new(),
            include_national: true,
            search: String::new(),
        }
    }
}

impl FilterState {
    /// Filter selecting every category in `categories`, nothing else narrowed.
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Search term trimmed and lowercased; `None` when blank.
    pub fn normalized_search(&self) -> Option<String> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

/// Table sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    /// Verified first.
    fn default() -> Self {
        Self {
            key: SortKey::Verified,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Column-header click: same key flips direction, a new key starts ascending.
    #[must_use]
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Ascending,
            }
        }
    }
}
