//! # attune-core
//!
//! Foundation crate for the Attune quality-control engine.
//! Defines shared types, constants, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{AttuneConfig, TimeBudget};
pub use errors::budget_error::BudgetError;
pub use errors::error_code::AttuneErrorCode;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::detector::Detector;
pub use types::quality::{DegradationLevel, QualityGate, QualityLevel};
