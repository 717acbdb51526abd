//! End-to-end tests for the map pipeline over on-disk fixtures.

use std::path::{Path, PathBuf};

use polars::prelude::AnyValue;
use tempfile::TempDir;

use hai_cli::cli::{FloorsArgs, MapArgs, SectorsArgs};
use hai_cli::commands::{run_floors, run_map, run_sectors};
use hai_ingest::{any_to_f64, any_to_string, read_csv_table};

const EVENTS_CSV: &str = "bed_id,hai_flag\nA1,1\nA1,0\nB2,1\n";
const COORDS_CSV: &str = "bed_id,x,y,floor\nA1,0,0,ICU\nB2,1,0,ICU\nC3,2,0,1A\n";

fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn map_args(events: PathBuf, coordinates: PathBuf) -> MapArgs {
    MapArgs {
        events,
        coordinates,
        floor: None,
        floors_file: None,
        output: None,
        exclude_unobserved: false,
    }
}

fn cell_string(result: &hai_cli::commands::MapResult, column: &str, idx: usize) -> String {
    let value = result
        .frame
        .data
        .column(column)
        .unwrap()
        .get(idx)
        .unwrap_or(AnyValue::Null);
    any_to_string(value)
}

fn cell_f64(result: &hai_cli::commands::MapResult, column: &str, idx: usize) -> Option<f64> {
    let value = result.frame.data.column(column).unwrap().get(idx).ok()?;
    any_to_f64(value)
}

#[test]
fn map_joins_and_orders_the_reference_scenario() {
    let dir = TempDir::new().unwrap();
    let events = write_fixture(dir.path(), "events.csv", EVENTS_CSV);
    let coordinates = write_fixture(dir.path(), "coords.csv", COORDS_CSV);

    let result = run_map(&map_args(events, coordinates)).unwrap();

    assert_eq!(result.frame.record_count(), 3);
    assert_eq!(result.floors, vec!["ICU".to_string(), "1A".to_string()]);
    assert_eq!(cell_string(&result, "bed_id", 0), "A1");
    assert_eq!(cell_f64(&result, "risk_pct", 0), Some(50.0));
    assert_eq!(cell_f64(&result, "risk_pct", 1), Some(100.0));
    assert_eq!(cell_string(&result, "bed_id", 2), "C3");
    assert_eq!(cell_f64(&result, "risk_pct", 2), Some(0.0));
    assert_eq!(result.frame.source_files().len(), 2);
}

#[test]
fn map_restricts_to_one_floor() {
    let dir = TempDir::new().unwrap();
    let events = write_fixture(dir.path(), "events.csv", EVENTS_CSV);
    let coordinates = write_fixture(dir.path(), "coords.csv", COORDS_CSV);

    let mut args = map_args(events, coordinates);
    args.floor = Some("ICU".to_string());
    let result = run_map(&args).unwrap();

    assert_eq!(result.frame.record_count(), 2);
    assert_eq!(cell_string(&result, "floor", 0), "ICU");
    assert_eq!(cell_string(&result, "floor", 1), "ICU");
}

#[test]
fn map_unknown_floor_fails() {
    let dir = TempDir::new().unwrap();
    let events = write_fixture(dir.path(), "events.csv", EVENTS_CSV);
    let coordinates = write_fixture(dir.path(), "coords.csv", COORDS_CSV);

    let mut args = map_args(events, coordinates);
    args.floor = Some("6C West".to_string());
    let error = run_map(&args).unwrap_err();
    assert!(error.to_string().contains("6C West"));
}

#[test]
fn map_exclude_unobserved_drops_coordinate_only_beds() {
    let dir = TempDir::new().unwrap();
    let events = write_fixture(dir.path(), "events.csv", EVENTS_CSV);
    let coordinates = write_fixture(dir.path(), "coords.csv", COORDS_CSV);

    let mut args = map_args(events, coordinates);
    args.exclude_unobserved = true;
    let result = run_map(&args).unwrap();

    assert_eq!(result.frame.record_count(), 2);
    assert_eq!(result.floors, vec!["ICU".to_string()]);
}

#[test]
fn map_writes_output_csv() {
    let dir = TempDir::new().unwrap();
    let events = write_fixture(dir.path(), "events.csv", EVENTS_CSV);
    let coordinates = write_fixture(dir.path(), "coords.csv", COORDS_CSV);

    let mut args = map_args(events, coordinates);
    let output = dir.path().join("joined.csv");
    args.output = Some(output.clone());
    run_map(&args).unwrap();

    let written = read_csv_table(&output).unwrap();
    assert_eq!(
        written.headers,
        vec!["bed_id", "floor", "x", "y", "cases", "total", "risk_pct"]
    );
    assert_eq!(written.rows.len(), 3);
    assert_eq!(written.rows[0][0], "A1");
}

#[test]
fn map_missing_column_fails_with_schema_error() {
    let dir = TempDir::new().unwrap();
    let events = write_fixture(dir.path(), "events.csv", "bed_id\nA1\n");
    let coordinates = write_fixture(dir.path(), "coords.csv", COORDS_CSV);

    let error = run_map(&map_args(events, coordinates)).unwrap_err();
    assert!(error.to_string().contains("load events"));
    let root = error.root_cause().to_string();
    assert!(root.contains("hai_flag"), "root cause: {root}");
}

#[test]
fn map_tolerates_byte_empty_events_file() {
    let dir = TempDir::new().unwrap();
    let events = write_fixture(dir.path(), "events.csv", "");
    let coordinates = write_fixture(dir.path(), "coords.csv", COORDS_CSV);

    let result = run_map(&map_args(events, coordinates)).unwrap();
    assert_eq!(result.frame.record_count(), 3);
    assert_eq!(cell_f64(&result, "risk_pct", 0), Some(0.0));
}

#[test]
fn map_custom_floor_enumeration() {
    let dir = TempDir::new().unwrap();
    let events = write_fixture(dir.path(), "events.csv", EVENTS_CSV);
    let coordinates = write_fixture(dir.path(), "coords.csv", COORDS_CSV);
    let floors_file = write_fixture(dir.path(), "floors.json", r#"["1A", "ICU"]"#);

    let mut args = map_args(events, coordinates);
    args.floors_file = Some(floors_file);
    let result = run_map(&args).unwrap();

    // Custom order puts 1A before ICU.
    assert_eq!(result.floors, vec!["1A".to_string(), "ICU".to_string()]);
    assert_eq!(cell_string(&result, "bed_id", 0), "C3");
}

#[test]
fn floors_lists_selector_in_order() {
    let dir = TempDir::new().unwrap();
    let coordinates = write_fixture(dir.path(), "coords.csv", COORDS_CSV);

    let floors = run_floors(&FloorsArgs {
        coordinates,
        floors_file: None,
    })
    .unwrap();
    assert_eq!(floors, vec!["ICU".to_string(), "1A".to_string()]);
}

#[test]
fn sectors_lists_png_plans() {
    let dir = TempDir::new().unwrap();
    let plans_dir = dir.path().join("planos");
    std::fs::create_dir(&plans_dir).unwrap();
    std::fs::write(plans_dir.join("icu.png"), b"img").unwrap();
    std::fs::write(plans_dir.join("east.png"), b"img").unwrap();
    std::fs::write(plans_dir.join("readme.txt"), b"text").unwrap();

    let plans = run_sectors(&SectorsArgs { dir: plans_dir }).unwrap();
    let names: Vec<&str> = plans.iter().map(|plan| plan.name.as_str()).collect();
    assert_eq!(names, vec!["east", "icu"]);
}
