//! Category display configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Preferred category order when no configuration file is supplied.
pub const DEFAULT_CATEGORY_ORDER: [&str; 8] = [
    "C-PACE Administrators",
    "Law Firms",
    "Capital Providers",
    "Program Consultants",
    "Technical Service Providers",
    "Contractors",
    "Property Owners",
    "Mortgage Holders",
];

/// Preferred display order plus layout hints for the grid.
///
/// Categories missing from `order` still render; they are appended
/// alphabetically after the configured ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    pub order: Vec<String>,
    pub layout: LayoutConfig,
    /// Per-category layout hints keyed by category name.
    pub hints: BTreeMap<String, CategoryHint>,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_CATEGORY_ORDER.iter().map(|c| c.to_string()).collect(),
            layout: LayoutConfig::default(),
            hints: BTreeMap::new(),
        }
    }
}

impl CategoryConfig {
    /// Returns true if the category asked to span the full grid width.
    pub fn is_wide(&self, category: &str) -> bool {
        self.hints.get(category).is_some_and(|hint| hint.wide)
    }
}

/// Grid layout settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// 1 for a single column, 2 for two balanced columns.
    pub column_count: u8,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { column_count: 2 }
    }
}

impl LayoutConfig {
    /// Column count clamped to the supported range.
    pub fn columns(&self) -> u8 {
        self.column_count.clamp(1, 2)
    }
}

/// Layout hint for a single category section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryHint {
    pub wide: bool,
}
