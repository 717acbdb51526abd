use serde::{Deserialize, Serialize};

use crate::error::{HaiError, Result};

/// Ward list of the reference deployment, in display order. Deployments with
/// a different taxonomy supply their own list via configuration.
pub const DEFAULT_FLOORS: [&str; 15] = [
    "5B North", "5B South", "4B North", "4B South", "3B North", "3B South", "2B North", "2B South",
    "ICU", "RCU", "BMT", "4A", "3A", "2A", "1A",
];

/// The fixed, ordered enumeration of floor labels.
///
/// Floor labels from coordinate data are matched exactly (after trimming)
/// against this list; the list position is the sort rank for the risk map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorOrder {
    floors: Vec<String>,
}

impl Default for FloorOrder {
    fn default() -> Self {
        Self {
            floors: DEFAULT_FLOORS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl FloorOrder {
    /// Build an enumeration from caller-supplied labels.
    ///
    /// Labels are trimmed; blank labels and repeats after the first
    /// occurrence are discarded. An effectively empty list is a
    /// configuration error.
    pub fn new(labels: impl IntoIterator<Item = impl Into<String>>) -> Result<Self> {
        let mut floors: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            let trimmed = label.trim();
            if trimmed.is_empty() {
                continue;
            }
            if floors.iter().any(|existing| existing == trimmed) {
                continue;
            }
            floors.push(trimmed.to_string());
        }
        if floors.is_empty() {
            return Err(HaiError::EmptyFloorOrder);
        }
        Ok(Self { floors })
    }

    /// Position of `floor` in the enumeration, if it is a known label.
    pub fn rank(&self, floor: &str) -> Option<usize> {
        let floor = floor.trim();
        self.floors.iter().position(|label| label == floor)
    }

    pub fn contains(&self, floor: &str) -> bool {
        self.rank(floor).is_some()
    }

    pub fn labels(&self) -> &[String] {
        &self.floors
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }
}
