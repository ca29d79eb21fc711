//! Type-safe enumerations for view and sort controls.
//!
//! These are the values the rendering layer sends back as column-header
//! clicks and mode toggles, so each one round-trips through a short string
//! form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Sortable column of the table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Name,
    Category,
    /// Verification status; the default key.
    Verified,
    /// States joined in declaration order.
    States,
    ContactInfo,
    WebsiteUrl,
}

impl SortKey {
    /// All keys in table column order.
    pub const ALL: [SortKey; 6] = [
        Self::Name,
        Self::Category,
        Self::Verified,
        Self::States,
        Self::ContactInfo,
        Self::WebsiteUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Verified => "verified",
            SortKey::States => "states",
            SortKey::ContactInfo => "contactInfo",
            SortKey::WebsiteUrl => "websiteUrl",
        }
    }

    /// Column header label.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Category => "Category",
            SortKey::Verified => "Verified",
            SortKey::States => "States",
            SortKey::ContactInfo => "Contact",
            SortKey::WebsiteUrl => "Website",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ModelError;

    /// Accepts the camelCase field name or a short alias, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "name" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            "verified" => Ok(SortKey::Verified),
            "states" | "state" => Ok(SortKey::States),
            "contactinfo" | "contact" => Ok(SortKey::ContactInfo),
            "websiteurl" | "website" => Ok(SortKey::WebsiteUrl),
            _ => Err(ModelError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ModelError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Presentation mode of the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Logo wall grouped by category.
    #[default]
    Grid,
    /// Flat sortable list.
    Table,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::Table => "table",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "table" => Ok(ViewMode::Table),
            _ => Err(ModelError::UnknownViewMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("Name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert_eq!("contact".parse::<SortKey>().unwrap(), SortKey::ContactInfo);
        assert_eq!("websiteUrl".parse::<SortKey>().unwrap(), SortKey::WebsiteUrl);
        assert!(matches!(
            "logo".parse::<SortKey>(),
            Err(ModelError::UnknownSortKey(_))
        ));
    }

    #[test]
    fn test_sort_key_round_trips_as_str() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_direction_flip() {
        assert_eq!(SortDirection::Ascending.flipped(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.flipped(), SortDirection::Ascending);
    }

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!("TABLE".parse::<ViewMode>().unwrap(), ViewMode::Table);
        assert!("masonry".parse::<ViewMode>().is_err());
    }
}
