//! Table and JSON rendering of command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gridkey_model::{CellValue, ExtractedRecord, HeaderLayout};
use gridkey_reports::{AttendanceEntry, DailySalesSummary};
use serde::Serialize;

/// Pretty JSON with a trailing newline.
///
/// # Errors
///
/// Fails only if `value` cannot be serialized.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

/// One column per key label (first-seen order) plus the display value.
pub fn records_table(records: &[ExtractedRecord]) -> Table {
    let mut labels: Vec<&str> = Vec::new();
    for record in records {
        for label in record.keys.keys() {
            if !labels.contains(&label.as_str()) {
                labels.push(label);
            }
        }
    }

    let mut table = Table::new();
    let mut header: Vec<Cell> = labels.iter().map(|label| header_cell(label)).collect();
    header.push(header_cell("value"));
    table.set_header(header);
    apply_table_style(&mut table);

    for record in records {
        let mut row: Vec<Cell> = labels
            .iter()
            .map(|label| key_cell(record.key(label)))
            .collect();
        row.push(Cell::new(&record.display_value));
        table.add_row(row);
    }
    table
}

pub fn layouts_table(layouts: &[HeaderLayout]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Position"),
        header_cell("Complete"),
        header_cell("Keys"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for layout in layouts {
        let keys = layout
            .keys
            .iter()
            .map(|(label, value)| format!("{label}={value}"))
            .collect::<Vec<_>>()
            .join(", ");
        let complete = if layout.complete {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::Red)
        };
        table.add_row(vec![Cell::new(layout.position), complete, Cell::new(keys)]);
    }
    table
}

pub fn attendance_table(entries: &[AttendanceEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Employee"),
        header_cell("Column"),
        header_cell("Date"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.employee),
            Cell::new(&entry.subcolumn),
            Cell::new(&entry.date),
            Cell::new(&entry.display_value),
        ]);
    }
    table
}

pub fn sales_table(summaries: &[DailySalesSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Gross"),
        header_cell("Profit"),
        header_cell("GRAB Gross"),
        header_cell("GRAB Profit"),
    ]);
    apply_table_style(&mut table);
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.date),
            key_cell(summary.gross()),
            key_cell(summary.profit()),
            number_cell(summary.grab_gross()),
            number_cell(summary.grab_profit()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn key_cell(value: Option<&CellValue>) -> Cell {
    match value {
        Some(value) if !value.is_empty() => Cell::new(value),
        _ => dim_cell("-"),
    }
}

fn number_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.2}")),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
