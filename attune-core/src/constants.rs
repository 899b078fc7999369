//! Shared numeric constants for the quality-control core.

/// Quality-gate thresholds (inclusive lower bounds).
pub const GATE_HIGH: f64 = 0.85;
pub const GATE_MEDIUM: f64 = 0.65;
pub const GATE_LOW: f64 = 0.50;

/// Standards scoring strictly between zero and this are flagged low-confidence.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Minimum standards confidence for full-quality operation.
pub const DEGRADATION_CONFIDENCE_THRESHOLD: f64 = 0.60;

/// Overall-confidence delta within which consecutive aggregations count as stable.
pub const TREND_STABLE_TOLERANCE: f64 = 0.05;

/// Rolling window of overall-confidence values kept for trend judgment.
pub const TREND_HISTORY_LEN: usize = 10;

/// Default bounded cache capacity (entries).
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Default cache entry time-to-live, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: f64 = 300.0;

/// Default soft timeout: exceeding it marks output quality degraded.
pub const DEFAULT_SOFT_TIMEOUT_SECS: f64 = 15.0;

/// Default hard timeout: the orchestrator treats exceeding it as a fatal abort.
pub const DEFAULT_HARD_TIMEOUT_SECS: f64 = 60.0;

/// Fraction of the total budget above which an LLM allocation draws a warning.
pub const LLM_BUDGET_WARN_FRACTION: f64 = 0.8;

/// Non-cache phase allocations below this (seconds) draw a warning.
pub const MIN_PHASE_BUDGET_SECS: f64 = 0.5;
