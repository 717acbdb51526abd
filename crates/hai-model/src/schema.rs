use crate::error::{HaiError, Result};

/// A required column with the alternate headers it may appear under.
///
/// Aliases cover the headers the reference deployment exports (Spanish
/// column names) so its files load without a mapping step.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

impl ColumnSpec {
    /// Whether `header` names this column, canonically or via an alias.
    /// Comparison is ASCII case-insensitive after trimming.
    pub fn matches(&self, header: &str) -> bool {
        let header = header.trim();
        header.eq_ignore_ascii_case(self.name)
            || self
                .aliases
                .iter()
                .any(|alias| header.eq_ignore_ascii_case(alias))
    }
}

/// The required column set of one source table.
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub table: &'static str,
    pub columns: &'static [ColumnSpec],
}

/// Event table: one row per patient-bed observation.
pub const EVENTS_SCHEMA: TableSchema = TableSchema {
    table: "events",
    columns: &[
        ColumnSpec {
            name: "bed_id",
            aliases: &["bed", "cama"],
        },
        ColumnSpec {
            name: "hai_flag",
            aliases: &["hai", "iaas_sino"],
        },
    ],
};

/// Coordinate table: one row per physical bed.
pub const COORDINATES_SCHEMA: TableSchema = TableSchema {
    table: "coordinates",
    columns: &[
        ColumnSpec {
            name: "bed_id",
            aliases: &["bed", "cama"],
        },
        ColumnSpec {
            name: "x",
            aliases: &["coord_x"],
        },
        ColumnSpec {
            name: "y",
            aliases: &["coord_y"],
        },
        ColumnSpec {
            name: "floor",
            aliases: &["piso"],
        },
    ],
};

impl TableSchema {
    /// Resolve every required column to its index in `headers`.
    ///
    /// Indices come back in the order of [`Self::columns`]. Fails with a
    /// schema error naming every missing column, not just the first.
    pub fn resolve(&self, headers: &[String]) -> Result<Vec<usize>> {
        let mut indices = Vec::with_capacity(self.columns.len());
        let mut missing = Vec::new();
        for column in self.columns {
            match headers.iter().position(|header| column.matches(header)) {
                Some(idx) => indices.push(idx),
                None => missing.push(column.name.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(HaiError::Schema {
                table: self.table.to_string(),
                columns: missing,
            });
        }
        Ok(indices)
    }
}
