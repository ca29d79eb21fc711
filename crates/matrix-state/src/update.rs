//! Message handling.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use matrix_ingest::FetchError;
use matrix_model::{RecordId, RecordStore, US_STATES, is_us_state};

use crate::message::MatrixMessage;
use crate::state::{LoadPhase, LoadedData, MatrixState};

impl MatrixState {
    /// Apply one message.
    ///
    /// Returns false when the message was a no-op: interaction before the
    /// data is ready, a category or state name that is not offered, or
    /// focusing a record that is not on screen. A no-op leaves the state,
    /// focus included, untouched.
    pub fn update(&mut self, msg: MatrixMessage) -> bool {
        let name = msg.name();
        let resets_focus = msg.resets_focus();

        let applied = match msg {
            MatrixMessage::Loaded(result) => {
                self.handle_loaded(result);
                true
            }
            _ if !self.is_ready() => {
                debug!(msg = name, "ignoring interaction before data is ready");
                false
            }
            MatrixMessage::ToggleCategory(category) => self.toggle_category(&category),
            MatrixMessage::SelectAllCategories => {
                self.filter.categories = self.all_categories();
                true
            }
            MatrixMessage::ClearAllCategories => {
                self.filter.categories.clear();
                true
            }
            MatrixMessage::ToggleState(state) => self.toggle_state(&state),
            MatrixMessage::SelectAllStates => {
                self.filter.states = US_STATES.iter().map(ToString::to_string).collect();
                true
            }
            MatrixMessage::ClearAllStates => {
                self.filter.states.clear();
                true
            }
            MatrixMessage::ToggleNational => {
                self.filter.include_national = !self.filter.include_national;
                true
            }
            MatrixMessage::SetSearch(search) => {
                self.filter.search = search;
                true
            }
            MatrixMessage::SortBy(key) => {
                self.sort = self.sort.toggled(key);
                true
            }
            MatrixMessage::SetViewMode(mode) => {
                self.mode = mode;
                true
            }
            MatrixMessage::Focus(target) => self.set_focus(target),
        };

        if applied && resets_focus && self.focus.take().is_some() {
            debug!(msg = name, "cleared focus");
        }
        debug!(
            msg = name,
            applied,
            mode = %self.mode,
            sort_key = %self.sort.key,
            sort_direction = %self.sort.direction,
            categories = self.filter.categories.len(),
            states = self.filter.states.len(),
            "matrix transition"
        );
        applied
    }

    fn handle_loaded(&mut self, result: Result<RecordStore, FetchError>) {
        match result {
            Ok(store) => {
                if self.is_ready() {
                    info!("replacing organization data");
                }
                let data = LoadedData::new(store, &self.config);
                self.filter.categories = data.order.iter().map(str::to_string).collect();
                self.phase = LoadPhase::Ready(data);
            }
            Err(error) => {
                warn!(error = %error, "organization data failed to load");
                self.filter.categories.clear();
                self.phase = LoadPhase::Failed(error);
            }
        }
    }

    fn all_categories(&self) -> BTreeSet<String> {
        self.order()
            .map(|order| order.iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn toggle_category(&mut self, category: &str) -> bool {
        if !self.order().is_some_and(|order| order.contains(category)) {
            debug!(category, "ignoring toggle of unknown category");
            return false;
        }
        toggle(&mut self.filter.categories, category);
        true
    }

    fn toggle_state(&mut self, state: &str) -> bool {
        if !is_us_state(state) {
            debug!(state, "ignoring toggle of unknown state");
            return false;
        }
        toggle(&mut self.filter.states, state);
        true
    }

    fn set_focus(&mut self, target: Option<RecordId>) -> bool {
        match target {
            None => self.focus.take().is_some(),
            Some(id) => {
                let shown = self
                    .data()
                    .is_some_and(|data| self.render_model(data).shows(&id));
                if !shown {
                    debug!(id = %id, "ignoring focus of a record that is not shown");
                    return false;
                }
                self.focus = Some(id);
                true
            }
        }
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}
