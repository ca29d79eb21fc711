pub mod config;
pub mod enums;
pub mod error;
pub mod ids;
pub mod organization;
pub mod query;
pub mod states;
pub mod store;

pub use config::{CategoryConfig, CategoryHint, DEFAULT_CATEGORY_ORDER, LayoutConfig};
pub use enums::{SortDirection, SortKey, ViewMode};
pub use error::{ModelError, Result};
pub use ids::RecordId;
pub use organization::{NATIONAL, Organization, PLACEHOLDER_LOGO_URL, UNCATEGORIZED, UNKNOWN_NAME};
pub use query::{FilterState, SortState};
pub use states::{US_STATES, is_us_state};
pub use store::{CategoryOrder, RecordStore};
