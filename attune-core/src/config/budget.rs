//! Per-request time budget.

use crate::constants::{LLM_BUDGET_WARN_FRACTION, MIN_PHASE_BUDGET_SECS};
use crate::errors::BudgetError;

/// Immutable per-request time budget, in seconds.
///
/// Invariant, enforced at construction: all fields are non-negative and
/// `analysis + standards + llm + formatting + cache <= total`.
/// Tight allocations (any non-cache phase under 0.5s, or an LLM share over
/// 80% of total) log a warning but still construct.
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    total: f64,
    analysis: f64,
    standards: f64,
    llm: f64,
    formatting: f64,
    cache: f64,
}

impl TimeBudget {
    pub fn new(
        total: f64,
        analysis: f64,
        standards: f64,
        llm: f64,
        formatting: f64,
        cache: f64,
    ) -> Result<Self, BudgetError> {
        let fields = [
            ("total", total),
            ("analysis", analysis),
            ("standards", standards),
            ("llm", llm),
            ("formatting", formatting),
            ("cache", cache),
        ];
        for (field, value) in fields {
            if value < 0.0 {
                return Err(BudgetError::NegativeDuration { field, value });
            }
        }

        let allocated = analysis + standards + llm + formatting + cache;
        if allocated > total {
            return Err(BudgetError::AllocationExceedsTotal { allocated, total });
        }

        if llm > total * LLM_BUDGET_WARN_FRACTION {
            tracing::warn!(
                llm_secs = llm,
                total_secs = total,
                "LLM phase allocated more than 80% of the total budget"
            );
        }
        for (field, value) in [
            ("analysis", analysis),
            ("standards", standards),
            ("llm", llm),
            ("formatting", formatting),
        ] {
            if value < MIN_PHASE_BUDGET_SECS {
                tracing::warn!(phase = field, secs = value, "phase budget under 0.5s");
            }
        }

        Ok(Self {
            total,
            analysis,
            standards,
            llm,
            formatting,
            cache,
        })
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn analysis(&self) -> f64 {
        self.analysis
    }

    pub fn standards(&self) -> f64 {
        self.standards
    }

    pub fn llm(&self) -> f64 {
        self.llm
    }

    pub fn formatting(&self) -> f64 {
        self.formatting
    }

    pub fn cache(&self) -> f64 {
        self.cache
    }

    /// Seconds not allocated to any named phase.
    pub fn slack(&self) -> f64 {
        self.total - (self.analysis + self.standards + self.llm + self.formatting + self.cache)
    }
}

impl Default for TimeBudget {
    /// 60s total: 10 analysis, 10 standards, 25 llm, 5 formatting, 5 cache.
    fn default() -> Self {
        Self {
            total: 60.0,
            analysis: 10.0,
            standards: 10.0,
            llm: 25.0,
            formatting: 5.0,
            cache: 5.0,
        }
    }
}
