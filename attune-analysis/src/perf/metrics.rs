//! Immutable performance snapshot and its one-line summary rendering.

use std::fmt;
use std::time::Duration;

use attune_core::{FxHashMap, QualityLevel};
use serde::Serialize;

/// Point-in-time metrics for one request. Immutable once produced by
/// `PerformanceTracker::snapshot`.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceMetrics {
    pub total_elapsed: Duration,
    pub phase_times: FxHashMap<String, Duration>,
    pub cache_hit: bool,
    pub cache_age_secs: Option<f64>,
    pub quality_level: QualityLevel,
}

impl fmt::Display for PerformanceMetrics {
    /// One-line summary for the logging collaborator, e.g.
    /// `total 2.31s | analysis 1.20s, llm 0.85s | cache hit (age 42s) | quality full`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "total {:.2}s", self.total_elapsed.as_secs_f64())?;

        // Sorted by name so the summary is deterministic.
        let mut phases: Vec<(&String, &Duration)> = self.phase_times.iter().collect();
        phases.sort_by_key(|(name, _)| name.as_str());
        if !phases.is_empty() {
            write!(f, " | ")?;
            for (i, (name, elapsed)) in phases.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{} {:.2}s", name, elapsed.as_secs_f64())?;
            }
        }

        match (self.cache_hit, self.cache_age_secs) {
            (true, Some(age)) => write!(f, " | cache hit (age {age:.0}s)")?,
            (true, None) => write!(f, " | cache hit")?,
            (false, _) => write!(f, " | cache miss")?,
        }

        write!(f, " | quality {}", self.quality_level)
    }
}
