//! The aggregation output consumed by the orchestrator and logging layer.

use attune_core::{Detector, FxHashMap, QualityGate};
use serde::Serialize;

use super::factors::FactorAnalysis;
use super::trend::TrendData;

/// One reporting detector's share of the overall confidence.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DetectorConfidence {
    pub detector: Detector,
    /// Clamped score in [0, 1].
    pub confidence: f64,
    pub weight: f64,
    /// `confidence × weight`: this detector's term in the weighted sum.
    pub contribution: f64,
}

/// Immutable confidence report, built fresh on every aggregation call.
#[derive(Debug, Clone, Serialize)]
pub struct StandardsConfidenceReport {
    /// Weighted mean over reporting detectors, renormalized to the
    /// weights of the detectors that actually reported.
    pub overall_confidence: f64,
    pub quality_gate: QualityGate,
    /// Clamped scores for the detectors that reported. Absence of a key
    /// is the "no data" sentinel.
    pub detector_scores: FxHashMap<Detector, f64>,
    /// Per-detector terms of the weighted sum, in weight-table order.
    pub contributions: Vec<DetectorConfidence>,
    /// The five standards with absent-as-zero defaults, sorted descending.
    pub standard_scores: Vec<(Detector, f64)>,
    /// Standards with a reported-but-weak score (strictly between 0 and
    /// 0.5). A zero or absent score signals "no data" and is not flagged.
    pub low_confidence_standards: Vec<Detector>,
    pub factor_analysis: FactorAnalysis,
    /// Populated from the second aggregation call onward.
    pub trend: Option<TrendData>,
    /// Unix timestamp (seconds) at which the report was built.
    pub timestamp: u64,
    pub version: String,
}
