//! Coordinator state.
//!
//! [`MatrixState`] owns the record store once it has loaded, the category
//! order computed from it, and every control the rendering layer can change.
//! Views are derived on demand with [`MatrixState::view`]; nothing derived is
//! stored.

use serde::Serialize;

use matrix_core::{RenderModel, derive_view, order_for_store};
use matrix_ingest::{DataProvider, FetchError, load_store};
use matrix_model::{
    CategoryConfig, CategoryOrder, FilterState, RecordId, RecordStore, SortState, ViewMode,
};

use crate::message::MatrixMessage;

/// A store together with the category order derived from it.
///
/// The two are only ever replaced together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedData {
    pub store: RecordStore,
    pub order: CategoryOrder,
}

impl LoadedData {
    pub fn new(store: RecordStore, config: &CategoryConfig) -> Self {
        let order = order_for_store(&store, &config.order);
        Self { store, order }
    }
}

/// Where the single fetch stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    /// The fetch failed; no data of any kind is held.
    Failed(FetchError),
    Ready(LoadedData),
}

/// What the rendering layer draws for the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum LoadView<'a> {
    Loading,
    Failed {
        message: &'a str,
    },
    Ready {
        model: RenderModel<'a>,
        focus: Option<&'a RecordId>,
    },
}

/// The view-state coordinator.
#[derive(Debug, Clone)]
pub struct MatrixState {
    pub(crate) config: CategoryConfig,
    pub(crate) phase: LoadPhase,
    pub(crate) filter: FilterState,
    pub(crate) sort: SortState,
    pub(crate) mode: ViewMode,
    pub(crate) focus: Option<RecordId>,
}

impl MatrixState {
    /// A coordinator waiting for its data.
    pub fn new(config: CategoryConfig) -> Self {
        Self {
            config,
            phase: LoadPhase::Loading,
            filter: FilterState::default(),
            sort: SortState::default(),
            mode: ViewMode::default(),
            focus: None,
        }
    }

    /// Fetch once from `provider` and apply the result.
    pub fn init(provider: &dyn DataProvider, config: CategoryConfig) -> Self {
        let mut state = Self::new(config);
        state.update(MatrixMessage::Loaded(load_store(provider)));
        state
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, LoadPhase::Ready(_))
    }

    pub fn data(&self) -> Option<&LoadedData> {
        match &self.phase {
            LoadPhase::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn store(&self) -> Option<&RecordStore> {
        self.data().map(|data| &data.store)
    }

    pub fn order(&self) -> Option<&CategoryOrder> {
        self.data().map(|data| &data.order)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.phase {
            LoadPhase::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn config(&self) -> &CategoryConfig {
        &self.config
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The expanded card or selected row, if any.
    pub fn focus(&self) -> Option<&RecordId> {
        self.focus.as_ref()
    }

    /// Derive what to draw from the current state.
    pub fn view(&self) -> LoadView<'_> {
        match &self.phase {
            LoadPhase::Loading => LoadView::Loading,
            LoadPhase::Failed(error) => LoadView::Failed {
                message: error.message(),
            },
            LoadPhase::Ready(data) => LoadView::Ready {
                model: self.render_model(data),
                focus: self.focus.as_ref(),
            },
        }
    }

    pub(crate) fn render_model<'a>(&'a self, data: &'a LoadedData) -> RenderModel<'a> {
        derive_view(
            &data.store,
            &data.order,
            &self.filter,
            self.sort,
            self.mode,
            &self.config,
        )
    }
}

impl Default for MatrixState {
    fn default() -> Self {
        Self::new(CategoryConfig::default())
    }
}
