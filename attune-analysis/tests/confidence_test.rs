//! Confidence aggregation tests: weighted correctness, gate boundaries,
//! absent-data handling, factor analysis, and trend judgment.

use attune_analysis::confidence::{ConfidenceAggregator, TrendDirection};
use attune_core::{Detector, FxHashMap, QualityGate};

fn scores(pairs: &[(Detector, f64)]) -> FxHashMap<Detector, f64> {
    pairs.iter().copied().collect()
}

fn all_at(value: f64) -> FxHashMap<Detector, f64> {
    Detector::ALL.iter().map(|d| (*d, value)).collect()
}

// ---- Weighted aggregation correctness ----

#[test]
fn all_ones_aggregate_to_one() {
    let mut aggregator = ConfidenceAggregator::new();
    let report = aggregator.aggregate(&all_at(1.0));
    assert!((report.overall_confidence - 1.0).abs() < 1e-9);
    assert_eq!(report.quality_gate, QualityGate::High);
}

#[test]
fn all_zeros_aggregate_to_zero() {
    let mut aggregator = ConfidenceAggregator::new();
    let report = aggregator.aggregate(&all_at(0.0));
    assert!(report.overall_confidence.abs() < 1e-9);
    assert_eq!(report.quality_gate, QualityGate::Fail);
}

#[test]
fn absent_detectors_renormalize_weights() {
    // Only project_type reports, at 1.0. Renormalizing over present
    // detectors must yield 1.0, not 0.20.
    let mut aggregator = ConfidenceAggregator::new();
    let report = aggregator.aggregate(&scores(&[(Detector::ProjectType, 1.0)]));
    assert!((report.overall_confidence - 1.0).abs() < 1e-9);
}

#[test]
fn no_detectors_yield_zero_without_error() {
    let mut aggregator = ConfidenceAggregator::new();
    let report = aggregator.aggregate(&FxHashMap::default());
    assert_eq!(report.overall_confidence, 0.0);
    assert_eq!(report.quality_gate, QualityGate::Fail);
    assert!(report.detector_scores.is_empty());
    assert!(report.trend.is_none());
}

#[test]
fn defaulting_applies_per_term_in_code_standards_mean() {
    // naming=0.8, organization=0.6, all else absent:
    // overall = (0.8*0.15 + 0.6*0.15) / 0.30 = 0.7
    // code_standards = (0.8 + 0.6) / 2 = 0.7 exactly.
    let mut aggregator = ConfidenceAggregator::new();
    let report = aggregator.aggregate(&scores(&[
        (Detector::NamingConventions, 0.8),
        (Detector::CodeOrganization, 0.6),
    ]));
    assert!((report.factor_analysis.code_standards_confidence - 0.7).abs() < 1e-12);
    assert!((report.overall_confidence - 0.7).abs() < 1e-9);
}

#[test]
fn scores_are_clamped_into_unit_interval() {
    let mut aggregator = ConfidenceAggregator::new();
    let report = aggregator.aggregate(&scores(&[
        (Detector::ProjectType, 1.7),
        (Detector::TestFramework, -0.4),
    ]));
    assert_eq!(report.detector_scores[&Detector::ProjectType], 1.0);
    assert_eq!(report.detector_scores[&Detector::TestFramework], 0.0);
    // Clamped-to-zero is "no data", so it must not be flagged weak.
    assert!(!report.low_confidence_standards.contains(&Detector::TestFramework));
}

#[test]
fn contributions_cover_reporting_detectors_only() {
    let mut aggregator = ConfidenceAggregator::new();
    let report = aggregator.aggregate(&scores(&[
        (Detector::ProjectType, 0.5),
        (Detector::GitHistory, 1.0),
    ]));
    assert_eq!(report.contributions.len(), 2);
    let project = &report.contributions[0];
    assert_eq!(project.detector, Detector::ProjectType);
    assert!((project.contribution - 0.5 * 0.20).abs() < 1e-12);
    let git = &report.contributions[1];
    assert_eq!(git.detector, Detector::GitHistory);
    assert!((git.weight - 0.05).abs() < 1e-12);
    // overall = (0.10 + 0.05) / 0.25 = 0.6
    assert!((report.overall_confidence - 0.6).abs() < 1e-9);
}

// ---- Determinism & idempotence ----

#[test]
fn aggregation_is_deterministic_and_idempotent() {
    let input = scores(&[
        (Detector::ProjectType, 0.82),
        (Detector::NamingConventions, 0.41),
        (Detector::GitHistory, 0.95),
    ]);
    let mut aggregator = ConfidenceAggregator::new();
    let first = aggregator.aggregate(&input);
    let second = aggregator.aggregate(&input);
    assert!((first.overall_confidence - second.overall_confidence).abs() < 1e-6);
    assert_eq!(first.quality_gate, second.quality_gate);
}

// ---- Quality gate boundaries ----

#[test]
fn gate_boundaries_are_inclusive_lower_bounds() {
    let cases = [
        (0.85, QualityGate::High),
        (0.849999, QualityGate::Medium),
        (0.65, QualityGate::Medium),
        (0.649999, QualityGate::Low),
        (0.50, QualityGate::Low),
        (0.499999, QualityGate::Fail),
    ];
    for (confidence, expected) in cases {
        // A single reporting detector pins the overall confidence exactly.
        let mut aggregator = ConfidenceAggregator::new();
        let report = aggregator.aggregate(&scores(&[(Detector::ProjectType, confidence)]));
        assert_eq!(report.quality_gate, expected, "confidence {confidence}");
    }
}

// ---- Standard scores and low-confidence flags ----

#[test]
fn standard_scores_sorted_descending_with_zero_defaults() {
    let mut aggregator = ConfidenceAggregator::new();
    let report = aggregator.aggregate(&scores(&[
        (Detector::TestFramework, 0.9),
        (Detector::NamingConventions, 0.3),
        (Detector::GitHistory, 0.99),
    ]));

    assert_eq!(report.standard_scores.len(), 5);
    assert_eq!(report.standard_scores[0], (Detector::TestFramework, 0.9));
    assert_eq!(report.standard_scores[1], (Detector::NamingConventions, 0.3));
    // Absent standards trail at 0.0; advisory git_history never appears.
    for (detector, score) in &report.standard_scores[2..] {
        assert_eq!(*score, 0.0);
        assert!(detector.is_standard());
    }
    let ordered: Vec<f64> = report.standard_scores.iter().map(|(_, s)| *s).collect();
    let mut sorted = ordered.clone();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
    assert_eq!(ordered, sorted);
}

#[test]
fn weak_but_reporting_standards_are_flagged() {
    let mut aggregator = ConfidenceAggregator::new();
    let report = aggregator.aggregate(&scores(&[
        (Detector::NamingConventions, 0.3),
        (Detector::DocumentationStyle, 0.0),
        (Detector::TestFramework, 0.5),
        (Detector::GitHistory, 0.1),
    ]));
    // 0.3 is weak; exact 0.0 is "no data"; 0.5 is at the threshold and
    // not flagged; advisory detectors are never flagged.
    assert_eq!(report.low_confidence_standards, vec![Detector::NamingConventions]);
}

#[test]
fn recommendations_cover_weak_standards() {
    let mut aggregator = ConfidenceAggregator::new();
    let report = aggregator.aggregate(&scores(&[
        (Detector::ProjectType, 0.9),
        (Detector::NamingConventions, 0.2),
        (Detector::TestFramework, 0.8),
        (Detector::DocumentationStyle, 0.1),
        (Detector::CodeOrganization, 0.7),
    ]));
    let recs = &report.factor_analysis.recommendations;
    assert_eq!(recs.len(), 2);
    assert!(recs.iter().any(|r| r.contains("naming")));
    assert!(recs.iter().any(|r| r.contains("documentation") || r.contains("docstrings")));
}

// ---- Factor analysis rankings ----

#[test]
fn strongest_and_weakest_rank_reporting_detectors() {
    let mut aggregator = ConfidenceAggregator::new();
    let report = aggregator.aggregate(&scores(&[
        (Detector::ProjectType, 0.95),
        (Detector::GitHistory, 0.80),
        (Detector::NamingConventions, 0.60),
        (Detector::TestFramework, 0.20),
        (Detector::DocumentationStyle, 0.05),
    ]));
    let analysis = &report.factor_analysis;
    assert_eq!(analysis.strongest[0], (Detector::ProjectType, 0.95));
    assert_eq!(analysis.strongest[1], (Detector::GitHistory, 0.80));
    assert_eq!(analysis.weakest[0], (Detector::DocumentationStyle, 0.05));
    assert_eq!(analysis.weakest[1], (Detector::TestFramework, 0.20));
}

#[test]
fn category_confidences_use_their_detectors() {
    let mut aggregator = ConfidenceAggregator::new();
    let report = aggregator.aggregate(&scores(&[
        (Detector::TestFramework, 0.65),
        (Detector::DocumentationStyle, 0.45),
        (Detector::ProjectType, 0.95),
    ]));
    let analysis = &report.factor_analysis;
    assert_eq!(analysis.testing_confidence, 0.65);
    assert_eq!(analysis.documentation_confidence, 0.45);
    assert_eq!(analysis.language_confidence, 0.95);
    // Neither naming nor organization reported.
    assert_eq!(analysis.code_standards_confidence, 0.0);
}

// ---- Trend ----

#[test]
fn trend_absent_on_first_call_then_tracks_direction() {
    let mut aggregator = ConfidenceAggregator::new();

    let first = aggregator.aggregate(&scores(&[(Detector::ProjectType, 0.50)]));
    assert!(first.trend.is_none());

    let improving = aggregator.aggregate(&scores(&[(Detector::ProjectType, 0.70)]));
    let trend = improving.trend.expect("second call populates trend");
    assert_eq!(trend.direction, TrendDirection::Improving);
    assert_eq!(trend.history.len(), 2);

    let degrading = aggregator.aggregate(&scores(&[(Detector::ProjectType, 0.40)]));
    assert_eq!(degrading.trend.unwrap().direction, TrendDirection::Degrading);

    let stable = aggregator.aggregate(&scores(&[(Detector::ProjectType, 0.42)]));
    assert_eq!(stable.trend.unwrap().direction, TrendDirection::Stable);
}

// ---- Report envelope ----

#[test]
fn report_serializes_to_json() {
    let mut aggregator = ConfidenceAggregator::new();
    let report = aggregator.aggregate(&all_at(0.75));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["quality_gate"], "MEDIUM");
    assert_eq!(json["detector_scores"]["project_type"], 0.75);
    assert!(json["timestamp"].as_u64().is_some());
    assert!(!json["version"].as_str().unwrap().is_empty());
}
