//! Engine error types.
//!
//! Every failure mode has a named variant. No stringly-typed errors.

use thiserror::Error;

/// The analyzer's single rejection kind: an input outside its documented
/// domain. The computation itself performs no I/O and cannot fail for any
/// other reason.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

/// Result type alias for analyzer operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurrencyError {
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("No exchange rate on file for {0}")]
    MissingRate(crate::currency::Currency),
}
