//! Per-request performance tracker: named phase timers, cache-status
//! flags, and soft/hard timeout probes.
//!
//! One tracker = one request. The tracker's own start time anchors every
//! timeout probe, so trackers must never be shared across requests.
//!
//! The phase map and the cache-status flags sit behind independent
//! mutexes; recording a cache hit never contends with phase updates from
//! another detector thread. No lock is held across anything blocking.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use attune_core::constants::DEFAULT_SOFT_TIMEOUT_SECS;
use attune_core::{FxHashMap, QualityLevel};

use super::metrics::PerformanceMetrics;

struct PhaseTiming {
    started_at: Instant,
    elapsed: Duration,
}

#[derive(Default)]
struct CacheStatus {
    hit: bool,
    age_secs: Option<f64>,
}

pub struct PerformanceTracker {
    started_at: Instant,
    phases: Mutex<FxHashMap<String, PhaseTiming>>,
    cache_status: Mutex<CacheStatus>,
}

impl PerformanceTracker {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            phases: Mutex::new(FxHashMap::default()),
            cache_status: Mutex::new(CacheStatus::default()),
        }
    }

    /// Begin timing a named phase. Re-starting an already-started phase
    /// overwrites its start time (last write wins) but keeps any elapsed
    /// time already finalized for it.
    pub fn start_phase(&self, name: &str) {
        let now = Instant::now();
        if let Ok(mut phases) = self.phases.lock() {
            let timing = phases.entry(name.to_string()).or_insert(PhaseTiming {
                started_at: now,
                elapsed: Duration::ZERO,
            });
            timing.started_at = now;
        }
    }

    /// Finalize a named phase's elapsed time. Ending a phase that was
    /// never started is a no-op. The last `end_phase` wins over the most
    /// recent `start_phase`.
    pub fn end_phase(&self, name: &str) {
        if let Ok(mut phases) = self.phases.lock() {
            if let Some(timing) = phases.get_mut(name) {
                timing.elapsed = timing.started_at.elapsed();
                tracing::debug!(phase = name, elapsed_ms = timing.elapsed.as_millis() as u64, "phase complete");
            }
        }
    }

    /// Record that this request was served from cache, with the entry's age.
    pub fn record_cache_hit(&self, age_secs: f64) {
        if let Ok(mut status) = self.cache_status.lock() {
            status.hit = true;
            status.age_secs = Some(age_secs);
        }
    }

    /// Record that this request missed the cache.
    pub fn record_cache_miss(&self) {
        if let Ok(mut status) = self.cache_status.lock() {
            status.hit = false;
            status.age_secs = None;
        }
    }

    /// Wall-clock time since the tracker was created.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Whether elapsed time exceeds the soft threshold. No side effects;
    /// the orchestrator decides what to abandon.
    pub fn check_soft_timeout(&self, threshold_secs: f64) -> bool {
        self.elapsed().as_secs_f64() > threshold_secs
    }

    /// Whether elapsed time exceeds the hard threshold.
    pub fn check_hard_timeout(&self, threshold_secs: f64) -> bool {
        self.elapsed().as_secs_f64() > threshold_secs
    }

    /// Seconds left of a total budget. Negative once the budget is spent.
    pub fn time_remaining(&self, total_secs: f64) -> f64 {
        total_secs - self.elapsed().as_secs_f64()
    }

    /// Point-in-time immutable metrics snapshot, judged against the
    /// default 15s soft timeout.
    pub fn snapshot(&self) -> PerformanceMetrics {
        self.snapshot_with_soft_timeout(DEFAULT_SOFT_TIMEOUT_SECS)
    }

    /// Snapshot against an explicit soft timeout.
    pub fn snapshot_with_soft_timeout(&self, soft_timeout_secs: f64) -> PerformanceMetrics {
        let total_elapsed = self.elapsed();

        let phase_times: FxHashMap<String, Duration> = self
            .phases
            .lock()
            .map(|phases| {
                phases
                    .iter()
                    .map(|(name, timing)| (name.clone(), timing.elapsed))
                    .collect()
            })
            .unwrap_or_default();

        let (cache_hit, cache_age_secs) = self
            .cache_status
            .lock()
            .map(|status| (status.hit, status.age_secs))
            .unwrap_or((false, None));

        let quality_level = if total_elapsed.as_secs_f64() > soft_timeout_secs {
            QualityLevel::Degraded
        } else {
            QualityLevel::Full
        };

        PerformanceMetrics {
            total_elapsed,
            phase_times,
            cache_hit,
            cache_age_secs,
            quality_level,
        }
    }
}

impl Default for PerformanceTracker {
    fn default() -> Self {
        Self::new()
    }
}
