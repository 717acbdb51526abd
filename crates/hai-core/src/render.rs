//! The rendering contract for the floor-plan scatter.
//!
//! The core does not draw. It supplies, per bed, everything a renderer
//! needs: position, label, the continuous color value on the fixed [0, 100]
//! domain, the exact scale color, and the formatted display string. Any
//! renderer reproducing these values renders consistently with every other
//! implementation.

use serde::Serialize;

use hai_model::{JoinedBed, Result};

use crate::risk::RiskTable;

/// Fixed color-scale domain for `risk_pct`.
pub const RISK_DOMAIN: (f64, f64) = (0.0, 100.0);

/// Floor plans use screen coordinates: the y axis grows downward, so the
/// renderer must invert it to match the top-down floor convention.
pub const INVERT_Y_AXIS: bool = true;

/// An RGB color on the risk scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Scale anchor at risk 0.
pub const COLOR_LOW: Rgb = Rgb { r: 0, g: 128, b: 0 };
/// Scale anchor at risk 50.
pub const COLOR_MID: Rgb = Rgb {
    r: 255,
    g: 165,
    b: 0,
};
/// Scale anchor at risk 100.
pub const COLOR_HIGH: Rgb = Rgb { r: 255, g: 0, b: 0 };

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
}

fn blend(from: Rgb, to: Rgb, t: f64) -> Rgb {
    Rgb {
        r: lerp(from.r, to.r, t),
        g: lerp(from.g, to.g, t),
        b: lerp(from.b, to.b, t),
    }
}

/// Color for a risk percentage: green at 0, orange at 50, red at 100,
/// piecewise-linear in between. Out-of-domain values clamp.
pub fn risk_color(risk_pct: f64) -> Rgb {
    let pct = risk_pct.clamp(RISK_DOMAIN.0, RISK_DOMAIN.1);
    if pct <= 50.0 {
        blend(COLOR_LOW, COLOR_MID, pct / 50.0)
    } else {
        blend(COLOR_MID, COLOR_HIGH, (pct - 50.0) / 50.0)
    }
}

/// Display string for a risk percentage: two decimals plus `%`.
pub fn format_risk(risk_pct: f64) -> String {
    format!("{risk_pct:.2}%")
}

/// One scatter point of the floor plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPoint {
    pub x: f64,
    pub y: f64,
    /// Text label drawn at the point (the bed id).
    pub label: String,
    /// Continuous color value on [`RISK_DOMAIN`].
    pub value: f64,
    pub color: Rgb,
    /// Hover/legend text, e.g. `"37.50%"`.
    pub display: String,
}

impl RenderPoint {
    pub fn from_bed(bed: &JoinedBed) -> Self {
        Self {
            x: bed.x,
            y: bed.y,
            label: bed.bed_id.clone(),
            value: bed.risk_pct,
            color: risk_color(bed.risk_pct),
            display: format_risk(bed.risk_pct),
        }
    }
}

/// Everything a renderer needs to draw one floor.
#[derive(Debug, Clone, Serialize)]
pub struct FloorView {
    pub floor: String,
    /// Whether the y axis must be inverted when drawing.
    pub invert_y: bool,
    pub points: Vec<RenderPoint>,
}

/// Build the scatter for one floor of a risk table.
pub fn floor_view(table: &RiskTable, floor: &str) -> Result<FloorView> {
    let rows = table.select_floor(floor)?;
    Ok(FloorView {
        floor: floor.trim().to_string(),
        invert_y: INVERT_Y_AXIS,
        points: rows.iter().map(|bed| RenderPoint::from_bed(bed)).collect(),
    })
}
