//! Polars materialization of the joined risk table.
//!
//! The frame is the export surface: CSV output and tabular reports read
//! from it rather than from the typed rows.

use std::path::PathBuf;

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use hai_model::JoinedBed;

use crate::risk::RiskTable;

/// Provenance for a risk frame: which source files produced it.
#[derive(Debug, Clone, Default)]
pub struct RiskFrameMeta {
    pub source_files: Vec<PathBuf>,
}

impl RiskFrameMeta {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_source_file(mut self, path: PathBuf) -> Self {
        self.source_files.push(path);
        self
    }

    #[must_use]
    pub fn with_source_files(mut self, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.source_files.extend(paths);
        self
    }
}

/// A joined risk table as a polars `DataFrame`, with optional provenance.
#[derive(Debug, Clone)]
pub struct RiskFrame {
    pub data: DataFrame,
    pub meta: Option<RiskFrameMeta>,
}

impl RiskFrame {
    pub fn new(data: DataFrame) -> Self {
        Self { data, meta: None }
    }

    pub fn with_meta(data: DataFrame, meta: RiskFrameMeta) -> Self {
        Self {
            data,
            meta: Some(meta),
        }
    }

    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    pub fn source_files(&self) -> &[PathBuf] {
        self.meta
            .as_ref()
            .map(|meta| meta.source_files.as_slice())
            .unwrap_or(&[])
    }
}

/// Column order of the materialized table.
pub const RISK_FRAME_COLUMNS: [&str; 7] =
    ["bed_id", "floor", "x", "y", "cases", "total", "risk_pct"];

/// Materialize joined rows as a `DataFrame` in [`RISK_FRAME_COLUMNS`] order.
pub fn build_risk_frame(rows: &[JoinedBed]) -> Result<DataFrame> {
    let mut bed_ids: Vec<String> = Vec::with_capacity(rows.len());
    let mut floors: Vec<String> = Vec::with_capacity(rows.len());
    let mut xs: Vec<f64> = Vec::with_capacity(rows.len());
    let mut ys: Vec<f64> = Vec::with_capacity(rows.len());
    let mut cases: Vec<u32> = Vec::with_capacity(rows.len());
    let mut totals: Vec<u32> = Vec::with_capacity(rows.len());
    let mut risks: Vec<f64> = Vec::with_capacity(rows.len());
    for row in rows {
        bed_ids.push(row.bed_id.clone());
        floors.push(row.floor.clone());
        xs.push(row.x);
        ys.push(row.y);
        cases.push(row.cases as u32);
        totals.push(row.total as u32);
        risks.push(row.risk_pct);
    }

    let columns: Vec<Column> = vec![
        Series::new("bed_id".into(), bed_ids).into_column(),
        Series::new("floor".into(), floors).into_column(),
        Series::new("x".into(), xs).into_column(),
        Series::new("y".into(), ys).into_column(),
        Series::new("cases".into(), cases).into_column(),
        Series::new("total".into(), totals).into_column(),
        Series::new("risk_pct".into(), risks).into_column(),
    ];
    DataFrame::new(columns).context("build risk frame")
}

/// Materialize a whole [`RiskTable`].
pub fn table_to_frame(table: &RiskTable) -> Result<RiskFrame> {
    Ok(RiskFrame::new(build_risk_frame(table.rows())?))
}
