//! Integration tests for raw CSV reading.

use std::path::PathBuf;

use hai_ingest::read_csv_table;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn reads_headers_and_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "events.csv", "bed_id,hai_flag\nA1,1\nB2,0\n");

    let table = read_csv_table(&path).unwrap();
    assert_eq!(table.headers, vec!["bed_id", "hai_flag"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["A1", "1"]);
}

#[test]
fn strips_bom_and_trims_cells() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "events.csv", "\u{feff}bed_id, hai_flag\n A1 ,1\n");

    let table = read_csv_table(&path).unwrap();
    assert_eq!(table.headers, vec!["bed_id", "hai_flag"]);
    assert_eq!(table.rows[0], vec!["A1", "1"]);
}

#[test]
fn skips_blank_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "events.csv", "bed_id,hai_flag\n,,\nA1,1\n\n");

    let table = read_csv_table(&path).unwrap();
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn pads_short_rows_to_header_width() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "coords.csv", "bed_id,x,y,floor\nA1,0,0\n");

    let table = read_csv_table(&path).unwrap();
    assert_eq!(table.rows[0], vec!["A1", "0", "0", ""]);
}

#[test]
fn byte_empty_file_yields_empty_table() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "events.csv", "");

    let table = read_csv_table(&path).unwrap();
    assert!(table.is_empty());
}

#[test]
fn column_index_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "events.csv", "Bed_ID,HAI_Flag\nA1,1\n");

    let table = read_csv_table(&path).unwrap();
    assert_eq!(table.column_index("bed_id"), Some(0));
    assert_eq!(table.column_index("hai_flag"), Some(1));
    assert_eq!(table.column_index("floor"), None);
}

#[test]
fn missing_file_is_a_csv_error() {
    let dir = TempDir::new().unwrap();
    let result = read_csv_table(&dir.path().join("absent.csv"));
    assert!(result.is_err());
}
