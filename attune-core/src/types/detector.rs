//! The closed set of confidence detectors and their aggregation weights.
//!
//! A typo'd detector name cannot silently contribute zero weight: detectors
//! are a closed enum and the weight table is compile-time checked.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One independent confidence signal about a project characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Detector {
    ProjectType,
    IndicatorFiles,
    GitHistory,
    Fingerprinting,
    NamingConventions,
    TestFramework,
    DocumentationStyle,
    CodeOrganization,
}

impl Detector {
    /// All known detectors, in weight-table order.
    pub const ALL: [Detector; 8] = [
        Detector::ProjectType,
        Detector::IndicatorFiles,
        Detector::GitHistory,
        Detector::Fingerprinting,
        Detector::NamingConventions,
        Detector::TestFramework,
        Detector::DocumentationStyle,
        Detector::CodeOrganization,
    ];

    /// Fixed aggregation weight. Weights sum to 1.0 across `ALL`.
    pub const fn weight(self) -> f64 {
        match self {
            Detector::ProjectType => 0.20,
            Detector::IndicatorFiles => 0.10,
            Detector::GitHistory => 0.05,
            Detector::Fingerprinting => 0.05,
            Detector::NamingConventions => 0.15,
            Detector::TestFramework => 0.15,
            Detector::DocumentationStyle => 0.15,
            Detector::CodeOrganization => 0.15,
        }
    }

    /// Canonical snake_case name, used in cache keys and report output.
    pub const fn name(self) -> &'static str {
        match self {
            Detector::ProjectType => "project_type",
            Detector::IndicatorFiles => "indicator_files",
            Detector::GitHistory => "git_history",
            Detector::Fingerprinting => "fingerprinting",
            Detector::NamingConventions => "naming_conventions",
            Detector::TestFramework => "test_framework",
            Detector::DocumentationStyle => "documentation_style",
            Detector::CodeOrganization => "code_organization",
        }
    }

    /// Whether this detector belongs to the ranked standards subset.
    /// The rest (git history, indicator files, fingerprinting) are advisory:
    /// they feed the weighted overall score but never the low-confidence list.
    pub const fn is_standard(self) -> bool {
        matches!(
            self,
            Detector::ProjectType
                | Detector::NamingConventions
                | Detector::TestFramework
                | Detector::DocumentationStyle
                | Detector::CodeOrganization
        )
    }
}

impl fmt::Display for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
