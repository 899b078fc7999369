//! Factor analysis: strongest/weakest detectors, per-category confidence,
//! and improvement recommendations.

use attune_core::constants::LOW_CONFIDENCE_THRESHOLD;
use attune_core::{Detector, FxHashMap};
use serde::Serialize;
use smallvec::SmallVec;

/// Per-category breakdown of a confidence report.
#[derive(Debug, Clone, Serialize)]
pub struct FactorAnalysis {
    /// Top 3 reporting detectors by score, descending.
    pub strongest: SmallVec<[(Detector, f64); 3]>,
    /// Bottom 3 reporting detectors by score, ascending.
    pub weakest: SmallVec<[(Detector, f64); 3]>,
    /// Mean of naming-conventions and code-organization scores.
    pub code_standards_confidence: f64,
    pub testing_confidence: f64,
    pub documentation_confidence: f64,
    pub language_confidence: f64,
    /// One fixed suggestion per standard scoring under 0.5.
    pub recommendations: Vec<String>,
}

/// Score for `detector` with the absent-as-zero default applied to this
/// operand alone. Each operand of a combined formula gets its own default
/// before any arithmetic; defaulting the combined expression instead
/// silently corrupts averages when one term is a true zero.
fn score_or_zero(scores: &FxHashMap<Detector, f64>, detector: Detector) -> f64 {
    scores.get(&detector).copied().unwrap_or(0.0)
}

impl FactorAnalysis {
    /// Build the analysis from clamped, present-only detector scores.
    pub fn from_scores(scores: &FxHashMap<Detector, f64>) -> Self {
        let mut ranked: Vec<(Detector, f64)> = scores.iter().map(|(d, s)| (*d, *s)).collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        let strongest: SmallVec<[(Detector, f64); 3]> = ranked.iter().take(3).copied().collect();
        let weakest: SmallVec<[(Detector, f64); 3]> = ranked.iter().rev().take(3).copied().collect();

        let naming = score_or_zero(scores, Detector::NamingConventions);
        let organization = score_or_zero(scores, Detector::CodeOrganization);
        let code_standards_confidence = (naming + organization) / 2.0;

        Self {
            strongest,
            weakest,
            code_standards_confidence,
            testing_confidence: score_or_zero(scores, Detector::TestFramework),
            documentation_confidence: score_or_zero(scores, Detector::DocumentationStyle),
            language_confidence: score_or_zero(scores, Detector::ProjectType),
            recommendations: recommendations(scores),
        }
    }
}

/// Fixed improvement suggestions for standards scoring under 0.5
/// (absent standards count as zero here: no signal is itself actionable).
fn recommendations(scores: &FxHashMap<Detector, f64>) -> Vec<String> {
    let mut out = Vec::new();
    for detector in Detector::ALL {
        if !detector.is_standard() || score_or_zero(scores, detector) >= LOW_CONFIDENCE_THRESHOLD {
            continue;
        }
        let suggestion = match detector {
            Detector::ProjectType => "Add language marker files (manifest, lockfile) so the project type is detectable",
            Detector::NamingConventions => "Standardize naming conventions across the codebase",
            Detector::TestFramework => "Clarify test framework usage",
            Detector::DocumentationStyle => "Add docstrings and comments to establish a documentation style",
            Detector::CodeOrganization => "Organize code into a src/lib/test layout",
            _ => continue,
        };
        out.push(suggestion.to_string());
    }
    out
}
