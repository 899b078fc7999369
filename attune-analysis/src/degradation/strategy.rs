//! The degradation decision procedure.
//!
//! Deterministic, no I/O, first matching rule wins. The function is
//! monotonic over the input lattice: improving any single signal while
//! holding the rest fixed never lowers the resulting level.

use attune_core::constants::DEGRADATION_CONFIDENCE_THRESHOLD;
use attune_core::DegradationLevel;

use super::types::{DegradationInfo, DegradationSignals};

/// Decide how much optional enrichment work to perform.
///
/// Rules, in order:
/// 1. Full — project detected, confidence ≥ 0.60, no timeout, full file access.
/// 2. WithoutStandards (cached) — detected project whose standards call
///    timed out but has a reusable cached result.
/// 3. WithoutStandards — detected project without a timeout, but standards
///    are unreliable or file access is restricted.
/// 4. Generic — everything else: no project, or a timeout with no cache.
pub fn determine_level(signals: &DegradationSignals) -> DegradationInfo {
    let confidence_ok = signals.standards_confidence >= DEGRADATION_CONFIDENCE_THRESHOLD;

    let (level, cached) = if signals.project_detected
        && confidence_ok
        && !signals.api_timeout
        && !signals.file_access_denied
    {
        (DegradationLevel::Full, false)
    } else if signals.project_detected && signals.api_timeout && signals.cache_available {
        (DegradationLevel::WithoutStandards, true)
    } else if signals.project_detected && !signals.api_timeout {
        (DegradationLevel::WithoutStandards, false)
    } else {
        (DegradationLevel::Generic, false)
    };

    // Every failed condition is reported, not just the deciding one.
    let mut missing_components = Vec::new();
    let mut causes = Vec::new();
    if !signals.project_detected {
        missing_components.push("Project context".to_string());
        causes.push("project not detected".to_string());
    }
    if !confidence_ok {
        missing_components.push("Reliable standards".to_string());
        causes.push(format!(
            "low confidence ({:.0}%)",
            signals.standards_confidence * 100.0
        ));
    }
    if signals.file_access_denied {
        missing_components.push("Complete file access".to_string());
        causes.push("file access restricted".to_string());
    }
    if signals.api_timeout {
        missing_components.push("Real-time standards".to_string());
        causes.push(if signals.cache_available {
            "API timeout (cached standards available)".to_string()
        } else {
            "API timeout without cache".to_string()
        });
    }

    let reason = if causes.is_empty() {
        "all detection signals nominal".to_string()
    } else {
        causes.join(" and ")
    };

    let recommendation = match level {
        DegradationLevel::Full => "Proceed with full project-aware enrichment",
        DegradationLevel::WithoutStandards => {
            "Proceed with generic best practices and re-run standards detection once signals recover"
        }
        DegradationLevel::Generic => {
            "Provide the project type manually or retry once detection and file access are available"
        }
    }
    .to_string();

    tracing::debug!(level = %level, cached, reason = %reason, "degradation level determined");

    DegradationInfo {
        level,
        missing_components,
        reason,
        recommendation,
        cached,
    }
}
