//! Messages accepted by the coordinator.

use matrix_ingest::FetchError;
use matrix_model::{RecordId, RecordStore, SortKey, ViewMode};

/// Every event that can change a [`MatrixState`](crate::MatrixState).
///
/// The rendering layer turns user interactions into these; the loader
/// delivers [`MatrixMessage::Loaded`] once the provider settles.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixMessage {
    // =========================================================================
    // Data
    // =========================================================================
    /// Provider fetch settled. A later `Ok` replaces the store wholesale.
    Loaded(Result<RecordStore, FetchError>),

    // =========================================================================
    // Category filter
    // =========================================================================
    ToggleCategory(String),
    SelectAllCategories,
    ClearAllCategories,

    // =========================================================================
    // State filter
    // =========================================================================
    /// Toggle one entry of [`US_STATES`](matrix_model::US_STATES).
    ToggleState(String),
    SelectAllStates,
    ClearAllStates,
    /// Flip whether nationally operating records pass the state filter.
    ToggleNational,

    // =========================================================================
    // Search, sort, presentation
    // =========================================================================
    /// Raw search text as typed.
    SetSearch(String),
    /// Column header click.
    SortBy(SortKey),
    SetViewMode(ViewMode),
    /// Expand a grid card or select a table row; `None` collapses.
    Focus(Option<RecordId>),
}

impl MatrixMessage {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loaded(_) => "loaded",
            Self::ToggleCategory(_) => "toggle_category",
            Self::SelectAllCategories => "select_all_categories",
            Self::ClearAllCategories => "clear_all_categories",
            Self::ToggleState(_) => "toggle_state",
            Self::SelectAllStates => "select_all_states",
            Self::ClearAllStates => "clear_all_states",
            Self::ToggleNational => "toggle_national",
            Self::SetSearch(_) => "set_search",
            Self::SortBy(_) => "sort_by",
            Self::SetViewMode(_) => "set_view_mode",
            Self::Focus(_) => "focus",
        }
    }

    /// Returns true if applying the message may remove or regroup what is
    /// shown, which invalidates the focused record.
    pub fn resets_focus(&self) -> bool {
        !matches!(self, Self::SortBy(_) | Self::Focus(_))
    }
}
