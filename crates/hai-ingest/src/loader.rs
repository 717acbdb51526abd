//! Typed loaders for the two source tables.
//!
//! Loaders enforce the schema contract: missing columns are reported by
//! name, unparseable cells are reported by table/column/row, and a
//! byte-empty file is rejected as empty input. A header-only table is
//! valid and loads as zero records.

use std::path::Path;

use tracing::warn;

use hai_model::{
    BedCoordinate, COORDINATES_SCHEMA, EVENTS_SCHEMA, EventRecord, HaiError, Result,
};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::polars_utils::parse_f64;

/// Parse an HAI flag cell. Accepted spellings: `1`/`0`, `true`/`false`,
/// `yes`/`no`, case-insensitive.
pub fn parse_flag(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw == "1" || raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("yes") {
        return Some(true);
    }
    if raw == "0" || raw.eq_ignore_ascii_case("false") || raw.eq_ignore_ascii_case("no") {
        return Some(false);
    }
    None
}

fn ensure_has_schema(table: &CsvTable, name: &str) -> Result<()> {
    if table.is_empty() {
        return Err(HaiError::EmptyInput {
            table: name.to_string(),
        });
    }
    Ok(())
}

fn cell<'a>(row: &'a [String], idx: usize) -> &'a str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Convert a raw table into event records.
pub fn load_events(table: &CsvTable) -> Result<Vec<EventRecord>> {
    ensure_has_schema(table, EVENTS_SCHEMA.table)?;
    let indices = EVENTS_SCHEMA.resolve(&table.headers)?;
    let (bed_idx, flag_idx) = (indices[0], indices[1]);

    let mut events = Vec::with_capacity(table.rows.len());
    for (row_nr, row) in table.rows.iter().enumerate() {
        let bed_id = cell(row, bed_idx).trim();
        if bed_id.is_empty() {
            warn!(row = row_nr + 1, "skipping event row without bed id");
            continue;
        }
        let raw_flag = cell(row, flag_idx);
        let hai_flag = parse_flag(raw_flag).ok_or_else(|| HaiError::Value {
            table: EVENTS_SCHEMA.table.to_string(),
            column: "hai_flag".to_string(),
            row: row_nr + 1,
            value: raw_flag.to_string(),
        })?;
        events.push(EventRecord {
            bed_id: bed_id.to_string(),
            hai_flag,
        });
    }
    Ok(events)
}

/// Convert a raw table into coordinate records.
///
/// Coordinates are authoritative for the set of plotted beds, so the
/// exactly-once invariant is enforced here: duplicate bed ids keep the
/// first occurrence and later rows are dropped with a warning.
pub fn load_coordinates(table: &CsvTable) -> Result<Vec<BedCoordinate>> {
    ensure_has_schema(table, COORDINATES_SCHEMA.table)?;
    let indices = COORDINATES_SCHEMA.resolve(&table.headers)?;
    let (bed_idx, x_idx, y_idx, floor_idx) = (indices[0], indices[1], indices[2], indices[3]);

    let mut coordinates: Vec<BedCoordinate> = Vec::with_capacity(table.rows.len());
    for (row_nr, row) in table.rows.iter().enumerate() {
        let bed_id = cell(row, bed_idx).trim();
        if bed_id.is_empty() {
            warn!(row = row_nr + 1, "skipping coordinate row without bed id");
            continue;
        }
        if coordinates.iter().any(|existing| existing.bed_id == bed_id) {
            warn!(
                bed_id,
                row = row_nr + 1,
                "duplicate bed id in coordinates, keeping first occurrence"
            );
            continue;
        }
        let x = parse_numeric_cell(row, x_idx, "x", row_nr)?;
        let y = parse_numeric_cell(row, y_idx, "y", row_nr)?;
        coordinates.push(BedCoordinate {
            bed_id: bed_id.to_string(),
            x,
            y,
            floor: cell(row, floor_idx).trim().to_string(),
        });
    }
    Ok(coordinates)
}

fn parse_numeric_cell(row: &[String], idx: usize, column: &str, row_nr: usize) -> Result<f64> {
    let raw = cell(row, idx);
    parse_f64(raw).ok_or_else(|| HaiError::Value {
        table: COORDINATES_SCHEMA.table.to_string(),
        column: column.to_string(),
        row: row_nr + 1,
        value: raw.to_string(),
    })
}

/// Read and type an event table from disk.
pub fn read_events(path: &Path) -> Result<Vec<EventRecord>> {
    load_events(&read_csv_table(path)?)
}

/// Read and type a coordinate table from disk.
pub fn read_coordinates(path: &Path) -> Result<Vec<BedCoordinate>> {
    load_coordinates(&read_csv_table(path)?)
}
