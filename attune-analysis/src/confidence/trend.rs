//! Trend judgment over consecutive overall-confidence values.

use attune_core::constants::TREND_STABLE_TOLERANCE;
use serde::Serialize;

/// Direction of the overall-confidence trend between the two most recent
/// aggregations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Degrading,
    Stable,
}

impl TrendDirection {
    /// Compare the latest two values; deltas within ±0.05 are stable.
    pub fn classify(previous: f64, latest: f64) -> Self {
        if latest > previous + TREND_STABLE_TOLERANCE {
            Self::Improving
        } else if latest < previous - TREND_STABLE_TOLERANCE {
            Self::Degrading
        } else {
            Self::Stable
        }
    }
}

/// Rolling overall-confidence history for one aggregator instance.
/// Only produced from the second aggregation onward.
#[derive(Debug, Clone, Serialize)]
pub struct TrendData {
    pub history: Vec<f64>,
    pub direction: TrendDirection,
}
