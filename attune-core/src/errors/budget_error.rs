//! Time-budget construction errors.
//!
//! Budget validation is the only hard failure in the core; everything
//! downstream handles absent data as a normal condition.

use super::error_code::AttuneErrorCode;

/// Errors raised when constructing a `TimeBudget`.
#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    #[error("Phase allocations exceed total budget: {allocated:.1}s allocated, {total:.1}s total")]
    AllocationExceedsTotal { allocated: f64, total: f64 },

    #[error("Negative duration for {field}: {value}s")]
    NegativeDuration { field: &'static str, value: f64 },
}

impl AttuneErrorCode for BudgetError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::AllocationExceedsTotal { .. } => "BUDGET_ALLOCATION_EXCEEDS_TOTAL",
            Self::NegativeDuration { .. } => "BUDGET_NEGATIVE_DURATION",
        }
    }
}
