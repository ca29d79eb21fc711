use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use matrix_core::{RenderModel, TableRow};
use matrix_model::{CategoryConfig, CategoryOrder, RecordId, RecordStore, SortDirection, SortKey};

pub fn print_table_view(model: &RenderModel<'_>, rows: &[TableRow<'_>], focus: Option<&RecordId>) {
    let mut table = Table::new();
    table.set_header(
        SortKey::ALL
            .iter()
            .map(|key| sort_header_cell(*key, model))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for row in rows {
        let record = row.record;
        let focused = focus == Some(&record.id);
        let name = if focused {
            Cell::new(&record.name)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&record.name)
        };
        table.add_row(vec![
            name,
            Cell::new(row.category),
            verified_cell(record.verified),
            optional_cell((!record.states.is_empty()).then(|| record.states.join(", "))),
            optional_cell(record.contact_info.clone()),
            optional_cell(record.website_url.clone()),
        ]);
    }
    println!("{table}");
    println!("{} organization(s)", rows.len());
}

pub fn print_categories(store: &RecordStore, order: &CategoryOrder, config: &CategoryConfig) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Category"),
        header_cell("Records"),
        header_cell("Layout"),
        header_cell("Source"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total = 0usize;
    for (index, category) in order.iter().enumerate() {
        let count = store.get(category).map_or(0, <[_]>::len);
        total += count;
        let configured = config.order.iter().any(|c| c == category);
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(category),
            Cell::new(count),
            if config.is_wide(category) {
                Cell::new("wide")
            } else {
                dim_cell("-")
            },
            if configured {
                Cell::new("configured")
            } else {
                dim_cell("appended")
            },
        ]);
    }
    table.add_row(vec![
        dim_cell(""),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
        dim_cell(""),
        dim_cell(""),
    ]);
    println!("{table}");
}

pub fn print_states(states: &[&str]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("State")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, state) in states.iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), Cell::new(state)]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn sort_header_cell(key: SortKey, model: &RenderModel<'_>) -> Cell {
    if model.sort.key != key {
        return header_cell(key.label());
    }
    let arrow = match model.sort.direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    };
    header_cell(&format!("{} {arrow}", key.label())).fg(Color::Green)
}

fn verified_cell(verified: bool) -> Cell {
    if verified {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn optional_cell(value: Option<String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
