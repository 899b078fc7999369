//! Shared type definitions.

pub mod collections;
pub mod detector;
pub mod quality;

pub use collections::{FxHashMap, FxHashSet};
pub use detector::Detector;
pub use quality::{DegradationLevel, QualityGate, QualityLevel};
