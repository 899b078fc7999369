//! Confidence aggregation: weighted combination of per-detector scores
//! into an overall confidence, quality gate, factor analysis, and trend.

pub mod aggregator;
pub mod factors;
pub mod report;
pub mod trend;

pub use aggregator::ConfidenceAggregator;
pub use factors::FactorAnalysis;
pub use report::{DetectorConfidence, StandardsConfidenceReport};
pub use trend::{TrendData, TrendDirection};
