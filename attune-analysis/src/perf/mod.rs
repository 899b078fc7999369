//! Cache and timing engine: bounded TTL+LRU store, per-request phase
//! timers, and soft/hard timeout probes.

pub mod cache;
pub mod metrics;
pub mod tracker;

pub use cache::{CacheStats, TtlLruCache};
pub use metrics::PerformanceMetrics;
pub use tracker::PerformanceTracker;
