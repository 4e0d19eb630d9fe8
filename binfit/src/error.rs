//! Error types for binfit

use thiserror::Error;

/// Errors raised while constructing or running a solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BinFitError {
    /// Negative load, empty bin set, non-positive bin size,
    /// or a combination that does not cover the load reaching the evaluator.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Strategy identifier not known to the factory
    #[error("unknown strategy: '{0}' (expected one of: length, capacity, combo, all)")]
    UnknownStrategy(String),
}

/// Result type alias for binfit operations
pub type Result<T> = std::result::Result<T, BinFitError>;
