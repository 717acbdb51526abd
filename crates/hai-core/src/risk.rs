//! Per-bed risk aggregation and the floor-ordered joined table.

use std::collections::HashMap;

use tracing::debug;

use hai_model::{
    AggregateOptions, BedCoordinate, BedRisk, EventRecord, FloorOrder, HaiError, JoinedBed, Result,
    UnobservedPolicy,
};

/// Group events by bed in first-seen order and derive each bed's risk.
///
/// A group exists only when at least one event row references the bed, so
/// `total` is never zero here.
pub fn aggregate_events(events: &[EventRecord]) -> Vec<BedRisk> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, (usize, usize)> = HashMap::new();
    for event in events {
        let counts = groups.entry(event.bed_id.clone()).or_insert_with(|| {
            order.push(event.bed_id.clone());
            (0, 0)
        });
        if event.hai_flag {
            counts.0 += 1;
        }
        counts.1 += 1;
    }
    order
        .into_iter()
        .map(|bed_id| {
            let (cases, total) = groups[&bed_id];
            BedRisk::new(bed_id, cases, total)
        })
        .collect()
}

/// The joined, floor-ordered risk table.
///
/// Rows are ordered by floor rank, then floor label, then bed id, with
/// unenumerated floors after enumerated ones. The ordering and values are
/// deterministic for identical inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskTable {
    rows: Vec<JoinedBed>,
    floors: Vec<String>,
}

impl RiskTable {
    pub fn rows(&self) -> &[JoinedBed] {
        &self.rows
    }

    /// The ordered floor selector: enumerated floors present in the table.
    pub fn floors(&self) -> &[String] {
        &self.floors
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows of one floor.
    ///
    /// Fails when `floor` is not among the selectable floors; unenumerated
    /// labels are never selectable even when present in the table.
    pub fn select_floor(&self, floor: &str) -> Result<Vec<&JoinedBed>> {
        let floor = floor.trim();
        if !self.floors.iter().any(|label| label == floor) {
            return Err(HaiError::FloorNotFound {
                floor: floor.to_string(),
                available: self.floors.clone(),
            });
        }
        Ok(self.rows.iter().filter(|row| row.floor == floor).collect())
    }
}

/// Join per-bed risk onto the coordinate table.
///
/// Coordinates are authoritative: every coordinate bed appears exactly once
/// (duplicates beyond the first are skipped), and event beds without
/// coordinates are left out of the result. Beds without events follow the
/// unobserved policy. Pure function of its inputs.
pub fn compute_bed_risk(
    events: &[EventRecord],
    coordinates: &[BedCoordinate],
    floors: &FloorOrder,
    options: &AggregateOptions,
) -> RiskTable {
    let risks = aggregate_events(events);
    let risk_by_bed: HashMap<&str, &BedRisk> = risks
        .iter()
        .map(|risk| (risk.bed_id.as_str(), risk))
        .collect();

    let mut rows: Vec<JoinedBed> = Vec::with_capacity(coordinates.len());
    let mut matched = 0usize;
    for coordinate in coordinates {
        if rows.iter().any(|row| row.bed_id == coordinate.bed_id) {
            debug!(bed_id = %coordinate.bed_id, "skipping duplicate coordinate bed");
            continue;
        }
        let (cases, total, risk_pct) = match risk_by_bed.get(coordinate.bed_id.as_str()) {
            Some(risk) => {
                matched += 1;
                (risk.cases, risk.total, risk.risk_pct)
            }
            None => match options.unobserved {
                UnobservedPolicy::ZeroRisk => (0, 0, 0.0),
                UnobservedPolicy::Exclude => continue,
            },
        };
        let floor = coordinate.floor.trim().to_string();
        rows.push(JoinedBed {
            bed_id: coordinate.bed_id.clone(),
            floor_rank: floors.rank(&floor),
            floor,
            x: coordinate.x,
            y: coordinate.y,
            cases,
            total,
            risk_pct,
        });
    }
    if matched < risks.len() {
        debug!(
            unplotted = risks.len() - matched,
            "event beds without coordinates are excluded from the map"
        );
    }

    rows.sort_by(|a, b| {
        let a_key = (a.floor_rank.unwrap_or(usize::MAX), &a.floor, &a.bed_id);
        let b_key = (b.floor_rank.unwrap_or(usize::MAX), &b.floor, &b.bed_id);
        a_key.cmp(&b_key)
    });

    let mut floor_labels: Vec<String> = Vec::new();
    for row in &rows {
        if row.floor_rank.is_some() && !floor_labels.contains(&row.floor) {
            floor_labels.push(row.floor.clone());
        }
    }

    RiskTable {
        rows,
        floors: floor_labels,
    }
}
