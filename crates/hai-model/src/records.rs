use serde::{Deserialize, Serialize};

/// One patient-bed observation from the surveillance table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub bed_id: String,
    /// Whether the observation recorded a healthcare-associated infection.
    pub hai_flag: bool,
}

/// One physical bed from the coordinate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedCoordinate {
    pub bed_id: String,
    pub x: f64,
    pub y: f64,
    pub floor: String,
}

/// Per-bed aggregate derived from the event table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedRisk {
    pub bed_id: String,
    /// Observations with a positive HAI flag.
    pub cases: usize,
    /// All observations for the bed. Never zero: a group only exists once
    /// at least one event row references the bed.
    pub total: usize,
    pub risk_pct: f64,
}

impl BedRisk {
    pub fn new(bed_id: impl Into<String>, cases: usize, total: usize) -> Self {
        Self {
            bed_id: bed_id.into(),
            cases,
            total,
            risk_pct: risk_percentage(cases, total),
        }
    }
}

/// Risk percentage on the fixed [0, 100] domain.
///
/// Returns 0 for `total = 0` so unobserved beds can share the type, even
/// though the grouping itself never produces an empty group.
pub fn risk_percentage(cases: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * cases as f64 / total as f64
    }
}

/// A coordinate row joined with its derived risk.
///
/// `floor_rank` is the position of `floor` in the configured enumeration;
/// `None` marks a label outside the taxonomy, which keeps the row in the
/// table but out of floor-filtered views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedBed {
    pub bed_id: String,
    pub floor: String,
    pub floor_rank: Option<usize>,
    pub x: f64,
    pub y: f64,
    pub cases: usize,
    pub total: usize,
    pub risk_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_percentage_half() {
        assert_eq!(risk_percentage(1, 2), 50.0);
    }

    #[test]
    fn risk_percentage_empty_group_is_zero() {
        assert_eq!(risk_percentage(0, 0), 0.0);
    }

    #[test]
    fn bed_risk_new_computes_percentage() {
        let risk = BedRisk::new("A1", 3, 4);
        assert_eq!(risk.risk_pct, 75.0);
    }
}
