//! Configuration options for the risk aggregation.

use serde::{Deserialize, Serialize};

/// Policy for beds that have coordinates but no event rows.
///
/// The reference deployment plots such beds at zero risk, which conflates
/// "no data" with "zero measured risk"; `Exclude` is the alternative for
/// callers that need the distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnobservedPolicy {
    /// Keep the bed with `risk_pct = 0` (and `cases = total = 0`).
    #[default]
    ZeroRisk,
    /// Drop the bed from the joined table entirely.
    Exclude,
}

/// Options controlling risk aggregation behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateOptions {
    pub unobserved: UnobservedPolicy,
}

impl AggregateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_unobserved(mut self, policy: UnobservedPolicy) -> Self {
        self.unobserved = policy;
        self
    }
}
