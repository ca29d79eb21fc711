//! Organization records as they appear in the directory.

use serde::{Deserialize, Serialize};

use crate::RecordId;

/// Sentinel state value for organizations that operate in every state.
pub const NATIONAL: &str = "National";

/// Display name used when the upstream record has none.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Logo shown when the upstream record has no logo URL.
pub const PLACEHOLDER_LOGO_URL: &str = "https://dummyimage.com/50x50/cccccc/ffffff&text=NA";

/// Category assigned to records that declare none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One company or firm listed under a category.
///
/// Every field is already resolved to its default; ingestion never hands out
/// a partially populated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: RecordId,
    pub name: String,
    pub logo_url: String,
    pub verified: bool,
    pub states: Vec<String>,
    pub contact_info: Option<String>,
    pub website_url: Option<String>,
    /// The category this entry was grouped under.
    pub category: String,
    /// Every category the upstream record belongs to, when the source
    /// supports multi-category membership.
    pub all_categories: Option<Vec<String>>,
}

impl Organization {
    /// Create a record with every optional field at its default.
    pub fn new(id: RecordId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            logo_url: PLACEHOLDER_LOGO_URL.to_string(),
            verified: false,
            states: Vec::new(),
            contact_info: None,
            website_url: None,
            category: category.into(),
            all_categories: None,
        }
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_contact_info(mut self, contact: impl Into<String>) -> Self {
        self.contact_info = Some(contact.into());
        self
    }

    pub fn with_website_url(mut self, url: impl Into<String>) -> Self {
        self.website_url = Some(url.into());
        self
    }

    pub fn with_all_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.all_categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Categories this record belongs to.
    ///
    /// Falls back to the grouping category when `all_categories` is absent
    /// or empty.
    pub fn categories(&self) -> &[String] {
        match &self.all_categories {
            Some(all) if !all.is_empty() => all,
            _ => std::slice::from_ref(&self.category),
        }
    }

    /// Returns true if the record declares the national sentinel.
    pub fn is_national(&self) -> bool {
        self.states.iter().any(|state| state == NATIONAL)
    }
}
