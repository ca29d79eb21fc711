//! Filter engine.
//!
//! Three stages narrow the store in turn: category selection, state
//! membership, then free-text search. Stages intersect; only the values of a
//! single field are OR-ed together. Sections come out in [`CategoryOrder`],
//! and a category left with no records is dropped rather than returned empty.

use std::collections::BTreeSet;

use serde::Serialize;

use matrix_model::{CategoryOrder, FilterState, Organization, RecordStore};

use crate::sort::sort_verified_first;

/// Records of one category that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySection<'a> {
    pub category: &'a str,
    pub records: Vec<&'a Organization>,
}

/// Why a filtered view came out empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum EmptyReason {
    /// The category filter selects nothing present in the store.
    NoCategoriesSelected,
    /// Categories were selected but no record matches the state filter.
    NoStateMatches,
    /// Records matched the category and state filters but not the search.
    NoSearchMatches { term: String },
}

/// Filter output in source order, plus the reason when it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub sections: Vec<CategorySection<'a>>,
    pub empty: Option<EmptyReason>,
}

impl Selection<'_> {
    pub fn record_count(&self) -> usize {
        self.sections.iter().map(|section| section.records.len()).sum()
    }
}

/// Run all filter stages, keeping records in store order within each section.
pub fn select<'a>(
    store: &'a RecordStore,
    order: &'a CategoryOrder,
    filter: &FilterState,
) -> Selection<'a> {
    let term = filter.normalized_search();
    let mut selected_categories = 0usize;
    let mut state_survivors = 0usize;
    let mut sections = Vec::new();

    for category in order.iter() {
        if !filter.categories.contains(category) {
            continue;
        }
        let Some(records) = store.get(category) else {
            continue;
        };
        selected_categories += 1;

        let by_state: Vec<&Organization> = records
            .iter()
            .filter(|record| matches_states(record, &filter.states, filter.include_national))
            .collect();
        if by_state.is_empty() {
            continue;
        }
        state_survivors += by_state.len();

        let kept: Vec<&Organization> = match term.as_deref() {
            Some(term) => by_state
                .into_iter()
                .filter(|record| matches_search(record, term))
                .collect(),
            None => by_state,
        };
        if kept.is_empty() {
            continue;
        }
        sections.push(CategorySection {
            category,
            records: kept,
        });
    }

    let empty = if !sections.is_empty() {
        None
    } else if selected_categories == 0 {
        Some(EmptyReason::NoCategoriesSelected)
    } else if state_survivors == 0 {
        Some(EmptyReason::NoStateMatches)
    } else {
        Some(EmptyReason::NoSearchMatches {
            term: filter.search.trim().to_string(),
        })
    };

    Selection { sections, empty }
}

/// Filter the store and put each section in grid order (verified first).
pub fn filter_store<'a>(
    store: &'a RecordStore,
    order: &'a CategoryOrder,
    filter: &FilterState,
) -> Vec<CategorySection<'a>> {
    let mut sections = select(store, order, filter).sections;
    for section in &mut sections {
        sort_verified_first(&mut section.records);
    }
    sections
}

/// State stage predicate.
///
/// With no states selected every record passes. Otherwise a record passes if
/// it lists a selected state, or if national records are included and it
/// carries the national sentinel. A record with no states never passes an
/// active state filter.
pub fn matches_states(
    record: &Organization,
    states: &BTreeSet<String>,
    include_national: bool,
) -> bool {
    if states.is_empty() {
        return true;
    }
    record.states.iter().any(|state| states.contains(state))
        || (include_national && record.is_national())
}

/// Search stage predicate; `term` must already be trimmed and lowercased.
pub fn matches_search(record: &Organization, term: &str) -> bool {
    let hit = |value: &str| value.to_lowercase().contains(term);
    hit(&record.name)
        || record.contact_info.as_deref().is_some_and(hit)
        || record.states.iter().any(|state| hit(state))
        || record.categories().iter().any(|category| hit(category))
}
