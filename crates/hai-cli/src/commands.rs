use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::{debug, info, warn};

use hai_core::{RiskFrame, RiskFrameMeta, build_risk_frame, compute_bed_risk};
use hai_ingest::{
    SectorPlan, list_sector_plans, load_floor_order, read_coordinates, read_events,
};
use hai_model::{
    AggregateOptions, BedCoordinate, EventRecord, FloorOrder, HaiError, JoinedBed,
    UnobservedPolicy,
};

use crate::cli::{FloorsArgs, MapArgs, SectorsArgs};

/// Outcome of the `map` subcommand.
#[derive(Debug)]
pub struct MapResult {
    pub events_path: PathBuf,
    pub coordinates_path: PathBuf,
    /// Floor restriction, when requested.
    pub floor: Option<String>,
    /// The ordered floor selector of the full table.
    pub floors: Vec<String>,
    pub frame: RiskFrame,
    pub output: Option<PathBuf>,
}

pub fn run_map(args: &MapArgs) -> Result<MapResult> {
    let floors = resolve_floor_order(args.floors_file.as_deref())?;
    let events = events_or_empty(&args.events)?;
    let coordinates = coordinates_or_empty(&args.coordinates)?;
    debug!(
        events = events.len(),
        beds = coordinates.len(),
        "loaded source tables"
    );

    let options = AggregateOptions::new().with_unobserved(if args.exclude_unobserved {
        UnobservedPolicy::Exclude
    } else {
        UnobservedPolicy::ZeroRisk
    });
    let table = compute_bed_risk(&events, &coordinates, &floors, &options);

    let rows: Vec<JoinedBed> = match &args.floor {
        Some(name) => table
            .select_floor(name)?
            .into_iter()
            .cloned()
            .collect(),
        None => table.rows().to_vec(),
    };
    if rows.is_empty() {
        warn!("nothing to plot: the joined table is empty");
    }

    let data = build_risk_frame(&rows)?;
    let meta = RiskFrameMeta::new()
        .with_source_file(args.events.clone())
        .with_source_file(args.coordinates.clone());
    let mut frame = RiskFrame::with_meta(data, meta);

    if let Some(path) = &args.output {
        write_frame_csv(&mut frame.data, path)?;
        info!(path = %path.display(), rows = frame.record_count(), "wrote joined table");
    }

    Ok(MapResult {
        events_path: args.events.clone(),
        coordinates_path: args.coordinates.clone(),
        floor: args.floor.clone(),
        floors: table.floors().to_vec(),
        frame,
        output: args.output.clone(),
    })
}

pub fn run_floors(args: &FloorsArgs) -> Result<Vec<String>> {
    let floors = resolve_floor_order(args.floors_file.as_deref())?;
    let coordinates = coordinates_or_empty(&args.coordinates)?;
    let table = compute_bed_risk(&[], &coordinates, &floors, &AggregateOptions::default());
    Ok(table.floors().to_vec())
}

pub fn run_sectors(args: &SectorsArgs) -> Result<Vec<SectorPlan>> {
    let plans = list_sector_plans(&args.dir)
        .with_context(|| format!("list sector plans in {}", args.dir.display()))?;
    Ok(plans)
}

fn resolve_floor_order(path: Option<&Path>) -> Result<FloorOrder> {
    match path {
        Some(path) => load_floor_order(path)
            .with_context(|| format!("load floor enumeration from {}", path.display())),
        None => Ok(FloorOrder::default()),
    }
}

/// Load events, downgrading a byte-empty file to an empty table.
fn events_or_empty(path: &Path) -> Result<Vec<EventRecord>> {
    match read_events(path) {
        Ok(events) => Ok(events),
        Err(HaiError::EmptyInput { table }) => {
            warn!(%table, "source table is empty, continuing without rows");
            Ok(Vec::new())
        }
        Err(error) => Err(error).with_context(|| format!("load events from {}", path.display())),
    }
}

fn coordinates_or_empty(path: &Path) -> Result<Vec<BedCoordinate>> {
    match read_coordinates(path) {
        Ok(coordinates) => Ok(coordinates),
        Err(HaiError::EmptyInput { table }) => {
            warn!(%table, "source table is empty, continuing without rows");
            Ok(Vec::new())
        }
        Err(error) => {
            Err(error).with_context(|| format!("load coordinates from {}", path.display()))
        }
    }
}

fn write_frame_csv(data: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file =
        std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(data)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
