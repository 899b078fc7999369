//! Runtime configuration, loadable from TOML.

pub mod budget;

pub use budget::TimeBudget;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECS, DEFAULT_HARD_TIMEOUT_SECS,
    DEFAULT_SOFT_TIMEOUT_SECS,
};
use crate::errors::BudgetError;

/// Root configuration for the quality-control core.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AttuneConfig {
    pub budget: BudgetConfig,
    pub cache: CacheConfig,
    pub timeouts: TimeoutConfig,
}

impl AttuneConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}

/// `[budget]` section — per-request phase allocations, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BudgetConfig {
    pub total: Option<f64>,
    pub analysis: Option<f64>,
    pub standards: Option<f64>,
    pub llm: Option<f64>,
    pub formatting: Option<f64>,
    pub cache: Option<f64>,
}

impl BudgetConfig {
    /// Build a validated budget, defaulting unset fields per `TimeBudget::default`.
    pub fn to_budget(&self) -> Result<TimeBudget, BudgetError> {
        let d = TimeBudget::default();
        TimeBudget::new(
            self.total.unwrap_or(d.total()),
            self.analysis.unwrap_or(d.analysis()),
            self.standards.unwrap_or(d.standards()),
            self.llm.unwrap_or(d.llm()),
            self.formatting.unwrap_or(d.formatting()),
            self.cache.unwrap_or(d.cache()),
        )
    }
}

/// `[cache]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries. Default: 100.
    pub capacity: Option<usize>,
    /// TTL applied when the caller does not pass one. Default: 300s.
    pub default_ttl_secs: Option<f64>,
}

impl CacheConfig {
    pub fn effective_capacity(&self) -> usize {
        self.capacity.unwrap_or(DEFAULT_CACHE_CAPACITY)
    }

    pub fn effective_default_ttl_secs(&self) -> f64 {
        self.default_ttl_secs.unwrap_or(DEFAULT_CACHE_TTL_SECS)
    }
}

/// `[timeouts]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Soft timeout: exceeding it flags output quality as degraded. Default: 15s.
    pub soft_secs: Option<f64>,
    /// Hard timeout: the orchestrator aborts beyond this. Default: 60s.
    pub hard_secs: Option<f64>,
}

impl TimeoutConfig {
    pub fn effective_soft_secs(&self) -> f64 {
        self.soft_secs.unwrap_or(DEFAULT_SOFT_TIMEOUT_SECS)
    }

    pub fn effective_hard_secs(&self) -> f64 {
        self.hard_secs.unwrap_or(DEFAULT_HARD_TIMEOUT_SECS)
    }
}
