//! Opening a directory and replaying command-line choices onto it.
//!
//! Flags never touch the filter directly; each one becomes the message a
//! user click would send, so the command line exercises the same
//! transitions as an interactive surface.

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use matrix_ingest::{JsonFileProvider, MatrixConfig, load_config};
use matrix_model::{RecordId, SortDirection, SortKey, ViewMode};
use matrix_state::{MatrixMessage, MatrixState};

/// View choices gathered from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewRequest {
    pub mode: ViewMode,
    /// Categories to show; empty keeps every category selected.
    pub categories: Vec<String>,
    pub states: Vec<String>,
    pub exclude_national: bool,
    pub search: Option<String>,
    pub sort: Option<SortKey>,
    pub direction: Option<SortDirection>,
    /// Record to expand (grid) or select (table).
    pub focus: Option<String>,
}

/// Load `data` with the optional configuration file and fetch once.
pub fn open_session(data: &Path, config: Option<&Path>) -> Result<MatrixState> {
    let MatrixConfig { categories, fields } =
        load_config(config).context("load configuration")?;
    let provider = JsonFileProvider::new(data).with_fields(fields);
    Ok(MatrixState::init(&provider, categories))
}

/// Send the messages that reproduce `request`.
///
/// Returns a description of every choice the coordinator rejected.
pub fn apply_request(state: &mut MatrixState, request: &ViewRequest) -> Vec<String> {
    let mut rejected = Vec::new();

    if request.mode != state.mode() {
        let what = format!("mode {}", request.mode);
        dispatch(state, MatrixMessage::SetViewMode(request.mode), what, &mut rejected);
    }
    if !request.categories.is_empty() {
        let what = "clear categories".to_string();
        dispatch(state, MatrixMessage::ClearAllCategories, what, &mut rejected);
        for category in distinct(&request.categories) {
            let message = MatrixMessage::ToggleCategory(category.clone());
            dispatch(state, message, format!("category {category:?}"), &mut rejected);
        }
    }
    for name in distinct(&request.states) {
        let message = MatrixMessage::ToggleState(name.clone());
        dispatch(state, message, format!("state {name:?}"), &mut rejected);
    }
    if request.exclude_national {
        let what = "exclude national".to_string();
        dispatch(state, MatrixMessage::ToggleNational, what, &mut rejected);
    }
    if let Some(search) = &request.search {
        let message = MatrixMessage::SetSearch(search.clone());
        dispatch(state, message, format!("search {search:?}"), &mut rejected);
    }

    if let Some(key) = request.sort {
        dispatch(state, MatrixMessage::SortBy(key), format!("sort {key}"), &mut rejected);
    }
    if let Some(direction) = request.direction
        && state.is_ready()
        && state.sort().direction != direction
    {
        let key = state.sort().key;
        let what = format!("{direction} order");
        dispatch(state, MatrixMessage::SortBy(key), what, &mut rejected);
    }

    if let Some(focus) = &request.focus {
        let what = format!("focus {focus:?}");
        match RecordId::new(focus.as_str()) {
            Ok(id) => dispatch(state, MatrixMessage::Focus(Some(id)), what, &mut rejected),
            Err(error) => {
                warn!(%error, "ignored focus");
                rejected.push(what);
            }
        }
    }
    rejected
}

/// Print one `ignored ...` line per rejected choice.
pub fn write_rejected(out: &mut impl Write, rejected: &[String]) -> io::Result<()> {
    for choice in rejected {
        writeln!(out, "ignored {choice}")?;
    }
    Ok(())
}

/// Each value once, in first-seen order; a repeated flag must not toggle back off.
fn distinct(values: &[String]) -> Vec<&String> {
    let mut seen = BTreeSet::new();
    values
        .iter()
        .filter(|&value| seen.insert(value.as_str()))
        .collect()
}

fn dispatch(
    state: &mut MatrixState,
    message: MatrixMessage,
    what: String,
    rejected: &mut Vec<String>,
) {
    if !state.update(message) {
        warn!(choice = %what, "ignored");
        rejected.push(what);
    }
}
