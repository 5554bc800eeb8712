//! Console rendering of a validation run.

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use contacts_ingest::FilePreview;
use contacts_model::{columns, ValidationReport};

pub fn print_validation_summary(file: &Path, report: &ValidationReport, max_issues: usize) {
    println!("File: {}", file.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Outcome"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Valid").fg(Color::Green),
        Cell::new(report.valid_count()),
    ]);
    table.add_row(vec![
        Cell::new("Invalid").fg(Color::Red),
        count_cell(report.invalid_count(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate values flagged").fg(Color::Yellow),
        count_cell(report.duplicate_count(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(report.total_rows()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    print_issue_table(report, max_issues);
    print_duplicate_table(report, max_issues);
}

fn print_duplicate_table(report: &ValidationReport, max_issues: usize) {
    if report.duplicates.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Rows"),
    ]);
    apply_issue_table_style(&mut table);
    for entry in report.duplicates.iter().take(max_issues) {
        let rows = entry
            .rows
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(&entry.field).fg(Color::Yellow),
            Cell::new(&entry.value),
            Cell::new(rows),
        ]);
    }
    println!();
    println!("Duplicates:");
    println!("{table}");
    let hidden = report.duplicates.len().saturating_sub(max_issues);
    if hidden > 0 {
        println!("... and {hidden} more duplicate value(s)");
    }
}

fn print_issue_table(report: &ValidationReport, max_issues: usize) {
    if report.invalid_rows.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Phone"),
        header_cell("Errors"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for invalid in report.invalid_rows.iter().take(max_issues) {
        table.add_row(vec![
            Cell::new(invalid.original_index),
            Cell::new(invalid.row.get(columns::PHONE)),
            Cell::new(invalid.errors.join("\n")),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
    let hidden = report.invalid_rows.len().saturating_sub(max_issues);
    if hidden > 0 {
        println!("... and {hidden} more invalid row(s); use --report for the full list");
    }
}

pub fn print_preview(file: &Path, preview: &FilePreview) {
    println!("File: {}", file.display());
    println!(
        "Headers: {}",
        preview
            .headers
            .iter()
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut table = Table::new();
    table.set_header(
        preview
            .headers
            .iter()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for row in &preview.sample_rows {
        table.add_row(
            preview
                .headers
                .iter()
                .map(|name| Cell::new(row.get(name)))
                .collect::<Vec<_>>(),
        );
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_issue_table_style(table: &mut Table) {
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
