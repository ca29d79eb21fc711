//! View derivation.
//!
//! [`derive_view`] is the single entry point both presentations read from:
//! the grid and the table share one filter pass and differ only in how the
//! survivors are ordered.

use serde::Serialize;
use tracing::trace;

use matrix_model::{
    CategoryConfig, CategoryOrder, FilterState, Organization, RecordStore, SortState, ViewMode,
};

use crate::filter::{EmptyReason, select};
use crate::sort::{TableRow, flatten, sort_table, sort_verified_first};

/// One category block of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSection<'a> {
    pub category: &'a str,
    /// Layout hint: span the full grid width.
    pub wide: bool,
    pub records: Vec<&'a Organization>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ViewBody<'a> {
    Grid(Vec<GridSection<'a>>),
    Table(Vec<TableRow<'a>>),
    Empty(EmptyReason),
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderModel<'a> {
    pub mode: ViewMode,
    pub sort: SortState,
    pub column_count: u8,
    pub body: ViewBody<'a>,
}

impl RenderModel<'_> {
    /// Number of record entries shown (grid entries count once per section).
    pub fn record_count(&self) -> usize {
        match &self.body {
            ViewBody::Grid(sections) => sections.iter().map(|s| s.records.len()).sum(),
            ViewBody::Table(rows) => rows.len(),
            ViewBody::Empty(_) => 0,
        }
    }

    /// Returns true if a record with `id` is shown.
    pub fn shows(&self, id: &matrix_model::RecordId) -> bool {
        match &self.body {
            ViewBody::Grid(sections) => sections
                .iter()
                .any(|s| s.records.iter().any(|r| &r.id == id)),
            ViewBody::Table(rows) => rows.iter().any(|row| &row.record.id == id),
            ViewBody::Empty(_) => false,
        }
    }
}

/// Derive the render model for the current store and controls.
///
/// Grid: sections in category order, verified records first within each.
/// Table: all survivors flattened in category order, then sorted by `sort`.
pub fn derive_view<'a>(
    store: &'a RecordStore,
    order: &'a CategoryOrder,
    filter: &FilterState,
    sort: SortState,
    mode: ViewMode,
    config: &CategoryConfig,
) -> RenderModel<'a> {
    let selection = select(store, order, filter);
    trace!(
        sections = selection.sections.len(),
        records = selection.record_count(),
        %mode,
        "derived view"
    );
    let body = match selection.empty {
        Some(reason) => ViewBody::Empty(reason),
        None => match mode {
            ViewMode::Grid => ViewBody::Grid(
                selection
                    .sections
                    .into_iter()
                    .map(|section| {
                        let mut records = section.records;
                        sort_verified_first(&mut records);
                        GridSection {
                            category: section.category,
                            wide: config.is_wide(section.category),
                            records,
                        }
                    })
                    .collect(),
            ),
            ViewMode::Table => {
                let mut rows = flatten(&selection.sections);
                sort_table(&mut rows, sort);
                ViewBody::Table(rows)
            }
        },
    };
    RenderModel {
        mode,
        sort,
        column_count: config.layout.columns(),
        body,
    }
}
