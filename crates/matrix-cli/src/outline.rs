//! Plain-text rendering of a directory view.
//!
//! The grid becomes an indented outline, one block per category; the table
//! becomes a numbered list. No colors, so the output is stable to compare.

use std::fmt;

use matrix_core::{EmptyReason, GridSection, RenderModel, TableRow, ViewBody};
use matrix_model::{Organization, RecordId};
use matrix_state::LoadView;

/// `Display` adapter over a [`LoadView`].
pub struct Outline<'v, 'a>(pub &'v LoadView<'a>);

impl fmt::Display for Outline<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            LoadView::Loading => writeln!(f, "Loading organizations..."),
            LoadView::Failed { message } => writeln!(f, "Could not load organizations: {message}"),
            LoadView::Ready { model, focus } => write_model(f, model, *focus),
        }
    }
}

/// Render `view` to a string.
pub fn render_outline(view: &LoadView<'_>) -> String {
    Outline(view).to_string()
}

fn write_model(
    f: &mut fmt::Formatter<'_>,
    model: &RenderModel<'_>,
    focus: Option<&RecordId>,
) -> fmt::Result {
    match &model.body {
        ViewBody::Empty(reason) => writeln!(f, "{}", empty_message(reason)),
        ViewBody::Grid(sections) => {
            writeln!(
                f,
                "grid view, {} column(s), {} organization(s)",
                model.column_count,
                model.record_count()
            )?;
            for section in sections {
                write_section(f, section, focus)?;
            }
            Ok(())
        }
        ViewBody::Table(rows) => {
            writeln!(
                f,
                "table view by {} {}, {} organization(s)",
                model.sort.key.label().to_lowercase(),
                model.sort.direction,
                rows.len()
            )?;
            for (index, row) in rows.iter().enumerate() {
                write_row(f, index + 1, row, focus)?;
            }
            Ok(())
        }
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    section: &GridSection<'_>,
    focus: Option<&RecordId>,
) -> fmt::Result {
    writeln!(f)?;
    write!(f, "{} ({})", section.category, section.records.len())?;
    if section.wide {
        write!(f, " [wide]")?;
    }
    writeln!(f)?;
    for record in &section.records {
        writeln!(f, "  {} {}{}", badge(record), record.name, states_suffix(record))?;
        if focus == Some(&record.id) {
            write_details(f, record, section.category)?;
        }
    }
    Ok(())
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    number: usize,
    row: &TableRow<'_>,
    focus: Option<&RecordId>,
) -> fmt::Result {
    let record = row.record;
    let marker = if focus == Some(&record.id) { '>' } else { ' ' };
    writeln!(
        f,
        "{marker}{number:>3}. {} {} | {} | {}",
        badge(record),
        record.name,
        row.category,
        joined_states(record).unwrap_or_else(|| "-".to_string())
    )?;
    if marker == '>' {
        write_details(f, record, row.category)?;
    }
    Ok(())
}

fn write_details(f: &mut fmt::Formatter<'_>, record: &Organization, shown_in: &str) -> fmt::Result {
    if let Some(contact) = &record.contact_info {
        writeln!(f, "        contact: {contact}")?;
    }
    if let Some(website) = &record.website_url {
        writeln!(f, "        website: {website}")?;
    }
    let others: Vec<&str> = record
        .categories()
        .iter()
        .map(String::as_str)
        .filter(|category| *category != shown_in)
        .collect();
    if !others.is_empty() {
        writeln!(f, "        also in: {}", others.join(", "))?;
    }
    Ok(())
}

fn badge(record: &Organization) -> &'static str {
    if record.verified { "[x]" } else { "[ ]" }
}

fn joined_states(record: &Organization) -> Option<String> {
    (!record.states.is_empty()).then(|| record.states.join(", "))
}

fn states_suffix(record: &Organization) -> String {
    joined_states(record)
        .map(|states| format!(" ({states})"))
        .unwrap_or_default()
}

/// User-facing text for an empty view.
pub fn empty_message(reason: &EmptyReason) -> String {
    match reason {
        EmptyReason::NoCategoriesSelected => "No categories selected.".to_string(),
        EmptyReason::NoStateMatches => "No organizations operate in the selected states.".to_string(),
        EmptyReason::NoSearchMatches { term } => format!("No organizations match \"{term}\"."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_messages_are_distinct() {
        let messages = [
            empty_message(&EmptyReason::NoCategoriesSelected),
            empty_message(&EmptyReason::NoStateMatches),
            empty_message(&EmptyReason::NoSearchMatches {
                term: "acme".to_string(),
            }),
        ];
        assert_eq!(messages[2], "No organizations match \"acme\".");
        assert_ne!(messages[0], messages[1]);
    }

    #[test]
    fn phases_render() {
        assert_eq!(render_outline(&LoadView::Loading), "Loading organizations...\n");
        assert_eq!(
            render_outline(&LoadView::Failed { message: "offline" }),
            "Could not load organizations: offline\n"
        );
    }
}
