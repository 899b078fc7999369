//! Degradation strategy: a pure decision procedure mapping detection
//! outcomes to one of three discrete quality levels.

pub mod strategy;
pub mod types;

pub use strategy::determine_level;
pub use types::{DegradationInfo, DegradationSignals};
