//! Error types and stable error codes.

pub mod budget_error;
pub mod error_code;

pub use budget_error::BudgetError;
pub use error_code::AttuneErrorCode;
