use std::path::PathBuf;

use thiserror::Error;

/// Error taxonomy shared by every crate in the workspace.
///
/// Ingestion raises the schema/value/input variants, the aggregator raises
/// the floor variants, and the CLI shell decides what is fatal.
#[derive(Debug, Error)]
pub enum HaiError {
    /// A required column is absent from a source table.
    #[error("{table}: missing required column(s): {}", .columns.join(", "))]
    Schema { table: String, columns: Vec<String> },

    /// A requested floor is not among the selectable floors.
    #[error("floor {floor:?} not found (available: {})", .available.join(", "))]
    FloorNotFound {
        floor: String,
        available: Vec<String>,
    },

    /// A source table carried no schema at all (byte-empty file).
    ///
    /// A header-only table is not an error; it yields an empty result.
    #[error("{table}: source table is empty")]
    EmptyInput { table: String },

    /// A cell could not be parsed into the column's type.
    #[error("{table}: invalid {column} value {value:?} at data row {row}")]
    Value {
        table: String,
        column: String,
        /// 1-based data row index (header excluded).
        row: usize,
        value: String,
    },

    /// The configured floor enumeration has no entries.
    #[error("floor enumeration is empty")]
    EmptyFloorOrder,

    #[error("not a directory: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {}: {message}", .path.display())]
    Csv { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, HaiError>;
