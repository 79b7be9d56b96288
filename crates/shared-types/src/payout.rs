//! Payout-estimate payload and its derived chart record.

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

/// Raw payout figures as the extraction service emits them: locale-formatted
/// strings, any of which may be absent. Snake-case wire names are fixed by
/// the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutPayload {
    pub expected_value: Option<String>,
    /// `"min-max"` range, e.g. `"10.000.000-15.000.000"`.
    pub recommended_range: Option<String>,
    /// Percentage string, e.g. `"80%"`.
    pub probability_of_success: Option<String>,
}

impl PayoutPayload {
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(raw).map_err(PayloadError::decode("payout payload"))
    }
}

/// Derived min/max/expected/position values used to draw the payout range
/// indicator. Recomputed whenever the source payload changes; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub min: f64,
    pub max: f64,
    pub expected: f64,
    /// Position of the expected-value marker along the range, in `[0, 100]`.
    pub expected_position_percent: f64,
    pub probability: f64,
}
