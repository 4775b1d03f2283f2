use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use panda_export::Registration;
use panda_model::CodeTable;
use panda_tables::Region;

use crate::commands::{ExportReport, FileFailure, PrepReport};

pub fn print_prep_report(report: &PrepReport) {
    println!("Load files: {}", report.load_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("County"),
        header_cell("Records"),
        header_cell("Time"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let mut total = 0usize;
    for outcome in &report.prepared {
        total += outcome.records;
        table.add_row(vec![
            Cell::new(&outcome.code),
            Cell::new(&outcome.county),
            Cell::new(outcome.records),
            dim_cell(format!("{:.2?}", outcome.elapsed)),
        ]);
    }
    table.add_row(vec![
        total_cell("TOTAL"),
        total_cell(format!("{} files", report.prepared.len())),
        Cell::new(total).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_failures(&report.failures);
}

pub fn print_export_report(report: &ExportReport) {
    if report.dry_run {
        println!("Dry run: nothing was sent to PANDA");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Slug"),
        header_cell("Registration"),
        header_cell("Records"),
        header_cell("Batches"),
        header_cell("Time"),
    ]);
    apply_table_style(&mut table);
    for index in 3..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total = 0usize;
    for outcome in &report.exported {
        total += outcome.summary.processed;
        table.add_row(vec![
            Cell::new(&outcome.dataset),
            dim_cell(&outcome.summary.dataset),
            registration_cell(outcome.registration),
            Cell::new(outcome.summary.processed),
            Cell::new(outcome.summary.batches),
            dim_cell(format!("{:.2?}", outcome.summary.elapsed)),
        ]);
    }
    table.add_row(vec![
        total_cell("TOTAL"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_failures(&report.failures);
}

pub fn print_counties(region: Region, counties: &[(&str, &str)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("County")]);
    apply_table_style(&mut table);
    for (code, name) in counties {
        table.add_row(vec![Cell::new(code), Cell::new(name)]);
    }
    println!("{table}");
    println!("{} counties ({region})", counties.len());
}

pub fn print_code_table(table: &CodeTable) {
    let mut rendered = Table::new();
    rendered.set_header(vec![header_cell("Code"), header_cell("Label")]);
    apply_table_style(&mut rendered);
    for (code, label) in table.iter() {
        rendered.add_row(vec![Cell::new(code), Cell::new(label)]);
    }
    println!("{rendered}");
    println!("Unknown {} codes: {}", table.name, table.fallback);
}

fn print_failures(failures: &[FileFailure]) {
    if failures.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Failed file"), header_cell("Error")]);
    apply_table_style(&mut table);
    for failure in failures {
        table.add_row(vec![
            Cell::new(failure.file.display()).fg(Color::Red),
            Cell::new(&failure.error),
        ]);
    }
    println!("{table}");
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

fn registration_cell(registration: Registration) -> Cell {
    match registration {
        Registration::Created => Cell::new("created").fg(Color::Green),
        Registration::Existing { row_count } => {
            Cell::new(format!("existing ({row_count} rows)")).fg(Color::Yellow)
        }
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn total_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
