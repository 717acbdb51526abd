use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use hai_core::{Rgb, format_risk, risk_color};
use hai_ingest::{SectorPlan, any_to_f64, any_to_string, format_numeric};

use crate::commands::MapResult;

pub fn print_map_summary(result: &MapResult) {
    println!("Events: {}", result.events_path.display());
    println!("Coordinates: {}", result.coordinates_path.display());
    match &result.floor {
        Some(floor) => println!("Floor: {floor}"),
        None => {
            if !result.floors.is_empty() {
                println!("Floors: {}", result.floors.join(", "));
            }
        }
    }
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }

    if result.frame.record_count() == 0 {
        println!("(no beds to display)");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Bed"),
        header_cell("Floor"),
        header_cell("X"),
        header_cell("Y"),
        header_cell("Cases"),
        header_cell("Total"),
        header_cell("Risk"),
    ]);
    apply_table_style(&mut table);
    for idx in [2, 3, 4, 5, 6] {
        align_column(&mut table, idx, CellAlignment::Right);
    }

    let data = &result.frame.data;
    for idx in 0..data.height() {
        let risk = column_f64(data, "risk_pct", idx).unwrap_or(0.0);
        table.add_row(vec![
            Cell::new(column_string(data, "bed_id", idx)),
            Cell::new(column_string(data, "floor", idx)),
            Cell::new(format_numeric(column_f64(data, "x", idx).unwrap_or(0.0))),
            Cell::new(format_numeric(column_f64(data, "y", idx).unwrap_or(0.0))),
            Cell::new(column_string(data, "cases", idx)),
            Cell::new(column_string(data, "total", idx)),
            risk_cell(risk),
        ]);
    }
    println!("{table}");
}

pub fn print_floors(floors: &[String]) {
    if floors.is_empty() {
        println!("(no enumerated floors in the coordinate table)");
        return;
    }
    for floor in floors {
        println!("{floor}");
    }
}

pub fn print_sectors(plans: &[SectorPlan]) {
    if plans.is_empty() {
        println!("(no sector plans found)");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Sector"), header_cell("Image")]);
    apply_table_style(&mut table);
    for plan in plans {
        table.add_row(vec![
            Cell::new(&plan.name),
            Cell::new(plan.path.display().to_string()),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

/// Risk cell tinted with the exact scale color of the value.
fn risk_cell(risk: f64) -> Cell {
    let Rgb { r, g, b } = risk_color(risk);
    Cell::new(format_risk(risk)).fg(Color::Rgb { r, g, b })
}

fn column_string(data: &DataFrame, name: &str, idx: usize) -> String {
    match data.column(name) {
        Ok(column) => any_to_string(column.get(idx).unwrap_or(AnyValue::Null)),
        Err(_) => String::new(),
    }
}

fn column_f64(data: &DataFrame, name: &str, idx: usize) -> Option<f64> {
    data.column(name)
        .ok()
        .and_then(|column| column.get(idx).ok())
        .and_then(any_to_f64)
}
