//! Sort engine.
//!
//! Both orderings are built on `slice::sort_by`, which is stable: records
//! that compare equal keep the order they had going in.

use std::borrow::Cow;
use std::cmp::Ordering;

use serde::Serialize;

use matrix_model::{Organization, SortDirection, SortKey, SortState};

use crate::filter::CategorySection;

/// Grid order within one category: verified records first.
pub fn sort_verified_first(records: &mut [&Organization]) {
    records.sort_by_key(|record| !record.verified);
}

/// One row of the flattened table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableRow<'a> {
    pub category: &'a str,
    pub record: &'a Organization,
}

/// Flatten sections into rows, categories in section order and records in
/// the order each section holds them.
pub fn flatten<'a>(sections: &[CategorySection<'a>]) -> Vec<TableRow<'a>> {
    sections
        .iter()
        .flat_map(|section| {
            section.records.iter().map(move |&record| TableRow {
                category: section.category,
                record,
            })
        })
        .collect()
}

/// Sort table rows by the active column.
pub fn sort_table(rows: &mut [TableRow<'_>], sort: SortState) {
    rows.sort_by(|a, b| compare_rows(a, b, sort));
}

/// Table comparator.
///
/// `Verified` compares the flag alone, `true` first when descending. Every
/// other key compares its text value, reversed when descending, and breaks
/// exact ties by putting verified records first whatever the direction.
pub fn compare_rows(a: &TableRow<'_>, b: &TableRow<'_>, sort: SortState) -> Ordering {
    if sort.key == SortKey::Verified {
        let ordering = a.record.verified.cmp(&b.record.verified);
        return match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        };
    }
    let ordering = sort_value(a, sort.key).cmp(&sort_value(b, sort.key));
    let ordering = match sort.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    };
    ordering.then_with(|| b.record.verified.cmp(&a.record.verified))
}

/// Text value of a row at `key`; absent optional fields compare as empty.
pub fn sort_value<'a>(row: &TableRow<'a>, key: SortKey) -> Cow<'a, str> {
    let record = row.record;
    match key {
        SortKey::Name => Cow::Borrowed(record.name.as_str()),
        SortKey::Category => Cow::Borrowed(row.category),
        SortKey::Verified => Cow::Borrowed(if record.verified { "true" } else { "false" }),
        SortKey::States => Cow::Owned(record.states.join(", ")),
        SortKey::ContactInfo => Cow::Borrowed(record.contact_info.as_deref().unwrap_or("")),
        SortKey::WebsiteUrl => Cow::Borrowed(record.website_url.as_deref().unwrap_or("")),
    }
}
