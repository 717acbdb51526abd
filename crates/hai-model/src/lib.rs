pub mod error;
pub mod floors;
pub mod options;
pub mod records;
pub mod schema;

pub use error::{HaiError, Result};
pub use floors::{DEFAULT_FLOORS, FloorOrder};
pub use options::{AggregateOptions, UnobservedPolicy};
pub use records::{BedCoordinate, BedRisk, EventRecord, JoinedBed, risk_percentage};
pub use schema::{COORDINATES_SCHEMA, ColumnSpec, EVENTS_SCHEMA, TableSchema};
