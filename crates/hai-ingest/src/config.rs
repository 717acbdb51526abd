//! Floor enumeration configuration loading.

use std::path::Path;

use hai_model::{FloorOrder, HaiError, Result};

/// Load a floor enumeration from a JSON file.
///
/// The file holds a bare array of labels in display order, e.g.
/// `["5B North", "5B South", "ICU"]`.
pub fn load_floor_order(path: &Path) -> Result<FloorOrder> {
    let raw = std::fs::read_to_string(path).map_err(|error| HaiError::Io {
        path: path.to_path_buf(),
        source: error,
    })?;
    let labels: Vec<String> = serde_json::from_str(&raw).map_err(|error| HaiError::Config {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    FloorOrder::new(labels)
}
