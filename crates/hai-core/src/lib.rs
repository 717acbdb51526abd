pub mod frame;
pub mod render;
pub mod risk;

pub use frame::{RISK_FRAME_COLUMNS, RiskFrame, RiskFrameMeta, build_risk_frame, table_to_frame};
pub use render::{
    COLOR_HIGH, COLOR_LOW, COLOR_MID, FloorView, INVERT_Y_AXIS, RISK_DOMAIN, RenderPoint, Rgb,
    floor_view, format_risk, risk_color,
};
pub use risk::{RiskTable, aggregate_events, compute_bed_risk};
