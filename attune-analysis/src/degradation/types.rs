//! Inputs and output of the degradation decision.

use attune_core::DegradationLevel;
use serde::{Deserialize, Serialize};

/// Raw detection outcomes fed to `determine_level`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DegradationSignals {
    pub project_detected: bool,
    /// Aggregate standards confidence in [0, 1].
    pub standards_confidence: f64,
    pub api_timeout: bool,
    /// Whether a prior cached result can stand in for a timed-out call.
    pub cache_available: bool,
    pub file_access_denied: bool,
}

/// The decision output: level plus human-readable rationale. Stateless
/// and never mutated after construction; the confirmation/logging layer
/// renders `reason` and `recommendation` as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationInfo {
    pub level: DegradationLevel,
    /// Union of every failed condition's label, not just the one that
    /// determined the level.
    pub missing_components: Vec<String>,
    /// Conjunction of the textual causes, e.g.
    /// "project not detected and low confidence (45%)".
    pub reason: String,
    /// Single fixed suggestion keyed off the resulting level.
    pub recommendation: String,
    /// True when a timed-out call is being answered from cache.
    pub cached: bool,
}
