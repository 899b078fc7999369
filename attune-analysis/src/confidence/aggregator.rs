//! Weighted combination of per-detector confidence scores.

use std::cmp::Ordering;

use attune_core::constants::{LOW_CONFIDENCE_THRESHOLD, TREND_HISTORY_LEN};
use attune_core::{Detector, FxHashMap, QualityGate};

use super::factors::FactorAnalysis;
use super::report::{DetectorConfidence, StandardsConfidenceReport};
use super::trend::{TrendData, TrendDirection};

/// Aggregates detector scores into `StandardsConfidenceReport`s and keeps
/// the rolling overall-confidence history for trend judgment.
///
/// One instance per orchestration run. Absent detectors are excluded from
/// the weighted sum *and* its normalizing denominator; missing data never
/// drags the average down. No input combination makes `aggregate` fail.
pub struct ConfidenceAggregator {
    history: Vec<f64>,
}

impl ConfidenceAggregator {
    pub fn new() -> Self {
        Self { history: Vec::new() }
    }

    /// Combine the reporting detectors' scores. Missing keys are the
    /// absent sentinel; present scores are clamped into [0, 1].
    pub fn aggregate(&mut self, scores: &FxHashMap<Detector, f64>) -> StandardsConfidenceReport {
        let clamped: FxHashMap<Detector, f64> = scores
            .iter()
            .map(|(detector, score)| (*detector, score.clamp(0.0, 1.0)))
            .collect();

        let mut contributions = Vec::with_capacity(clamped.len());
        let mut weighted_sum = 0.0;
        let mut weight_sum = 0.0;
        for detector in Detector::ALL {
            let Some(&score) = clamped.get(&detector) else {
                continue;
            };
            let contribution = score * detector.weight();
            contributions.push(DetectorConfidence {
                detector,
                confidence: score,
                weight: detector.weight(),
                contribution,
            });
            weighted_sum += contribution;
            weight_sum += detector.weight();
        }
        let overall_confidence = if weight_sum > 0.0 {
            weighted_sum / weight_sum
        } else {
            0.0
        };
        let quality_gate = QualityGate::from_confidence(overall_confidence);

        let mut standard_scores: Vec<(Detector, f64)> = Detector::ALL
            .iter()
            .filter(|detector| detector.is_standard())
            .map(|detector| (*detector, clamped.get(detector).copied().unwrap_or(0.0)))
            .collect();
        standard_scores.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        // A true zero means "no data", not "detected and weak".
        let low_confidence_standards: Vec<Detector> = standard_scores
            .iter()
            .filter(|(_, score)| *score > 0.0 && *score < LOW_CONFIDENCE_THRESHOLD)
            .map(|(detector, _)| *detector)
            .collect();

        let factor_analysis = FactorAnalysis::from_scores(&clamped);

        self.history.push(overall_confidence);
        if self.history.len() > TREND_HISTORY_LEN {
            self.history.remove(0);
        }
        let trend = if self.history.len() >= 2 {
            let previous = self.history[self.history.len() - 2];
            Some(TrendData {
                history: self.history.clone(),
                direction: TrendDirection::classify(previous, overall_confidence),
            })
        } else {
            None
        };

        tracing::debug!(
            overall = overall_confidence,
            gate = %quality_gate,
            reporting = clamped.len(),
            "aggregated detector confidence"
        );

        StandardsConfidenceReport {
            overall_confidence,
            quality_gate,
            detector_scores: clamped,
            contributions,
            standard_scores,
            low_confidence_standards,
            factor_analysis,
            trend,
            timestamp: unix_now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for ConfidenceAggregator {
    fn default() -> Self {
        Self::new()
    }
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
