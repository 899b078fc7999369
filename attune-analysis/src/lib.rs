//! # attune-analysis
//!
//! The quality-control core of the Attune pipeline: a bounded TTL+LRU
//! cache with per-request phase timing, weighted confidence aggregation
//! with a quality gate, and the degradation-level decision procedure.

pub mod confidence;
pub mod degradation;
pub mod perf;
