//! Property tests: degradation monotonicity over the whole input lattice,
//! aggregation idempotence, and clamping bounds.

use attune_analysis::confidence::ConfidenceAggregator;
use attune_analysis::degradation::{determine_level, DegradationSignals};
use attune_core::{Detector, FxHashMap};
use proptest::prelude::*;

fn capability(signals: &DegradationSignals) -> u8 {
    determine_level(signals).level.capability()
}

proptest! {
    /// Strictly improving any single signal while holding the others
    /// fixed never lowers the resulting level.
    #[test]
    fn degradation_is_monotonic_in_each_signal(
        project_detected in any::<bool>(),
        confidence in 0.0f64..=1.0,
        api_timeout in any::<bool>(),
        cache_available in any::<bool>(),
        file_access_denied in any::<bool>(),
        bump in 0.0f64..=1.0,
    ) {
        let base = DegradationSignals {
            project_detected,
            standards_confidence: confidence,
            api_timeout,
            cache_available,
            file_access_denied,
        };
        let base_capability = capability(&base);

        if !project_detected {
            let improved = DegradationSignals { project_detected: true, ..base };
            prop_assert!(capability(&improved) >= base_capability);
        }
        if api_timeout {
            let improved = DegradationSignals { api_timeout: false, ..base };
            prop_assert!(capability(&improved) >= base_capability);
        }
        if file_access_denied {
            let improved = DegradationSignals { file_access_denied: false, ..base };
            prop_assert!(capability(&improved) >= base_capability);
        }
        if !cache_available {
            let improved = DegradationSignals { cache_available: true, ..base };
            prop_assert!(capability(&improved) >= base_capability);
        }
        let improved = DegradationSignals {
            standards_confidence: (confidence + bump).min(1.0),
            ..base
        };
        prop_assert!(capability(&improved) >= base_capability);
    }

    /// Identical inputs produce identical confidence and gate, in fresh
    /// and reused aggregator instances alike.
    #[test]
    fn aggregation_is_idempotent(
        raw in proptest::collection::vec((0usize..8, 0.0f64..=1.0), 0..8),
    ) {
        let scores: FxHashMap<Detector, f64> = raw
            .iter()
            .map(|(i, s)| (Detector::ALL[*i], *s))
            .collect();

        let mut fresh_a = ConfidenceAggregator::new();
        let mut fresh_b = ConfidenceAggregator::new();
        let a = fresh_a.aggregate(&scores);
        let b = fresh_b.aggregate(&scores);
        prop_assert!((a.overall_confidence - b.overall_confidence).abs() < 1e-6);
        prop_assert_eq!(a.quality_gate, b.quality_gate);

        let repeat = fresh_a.aggregate(&scores);
        prop_assert!((a.overall_confidence - repeat.overall_confidence).abs() < 1e-6);
        prop_assert_eq!(a.quality_gate, repeat.quality_gate);
    }

    /// Out-of-range inputs clamp: the overall confidence never escapes [0, 1].
    #[test]
    fn overall_confidence_stays_in_unit_interval(
        raw in proptest::collection::vec((0usize..8, -5.0f64..=5.0), 0..8),
    ) {
        let scores: FxHashMap<Detector, f64> = raw
            .iter()
            .map(|(i, s)| (Detector::ALL[*i], *s))
            .collect();
        let mut aggregator = ConfidenceAggregator::new();
        let report = aggregator.aggregate(&scores);
        prop_assert!((0.0..=1.0).contains(&report.overall_confidence));
        for score in report.detector_scores.values() {
            prop_assert!((0.0..=1.0).contains(score));
        }
    }
}
