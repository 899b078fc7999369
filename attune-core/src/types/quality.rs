//! Discrete quality classifications: gate tiers, degradation levels, and
//! the snapshot-level full/degraded flag.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{GATE_HIGH, GATE_LOW, GATE_MEDIUM};

/// Four-level classification of aggregate confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QualityGate {
    High,
    Medium,
    Low,
    Fail,
}

impl QualityGate {
    /// Classify an overall confidence into a gate tier.
    /// Thresholds are inclusive lower bounds: 0.85 / 0.65 / 0.50.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= GATE_HIGH {
            Self::High
        } else if confidence >= GATE_MEDIUM {
            Self::Medium
        } else if confidence >= GATE_LOW {
            Self::Low
        } else {
            Self::Fail
        }
    }
}

impl fmt::Display for QualityGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "HIGH"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::Low => write!(f, "LOW"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

/// How much optional enrichment work to perform.
/// Capability order: Full ⊃ WithoutStandards ⊃ Generic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradationLevel {
    Full = 1,
    WithoutStandards = 2,
    Generic = 3,
}

impl DegradationLevel {
    /// Capability rank: higher means more enrichment is performed.
    /// Use this for ordering comparisons; the discriminants above are
    /// wire-level identifiers, not an ordering.
    pub const fn capability(self) -> u8 {
        match self {
            Self::Full => 3,
            Self::WithoutStandards => 2,
            Self::Generic => 1,
        }
    }
}

impl fmt::Display for DegradationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::WithoutStandards => write!(f, "without_standards"),
            Self::Generic => write!(f, "generic"),
        }
    }
}

/// Whether a tracked request stayed inside its soft time budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Full,
    Degraded,
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Degraded => write!(f, "degraded"),
        }
    }
}
