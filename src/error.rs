//! Error types for minimization.

use thiserror::Error;

/// Errors that can occur while minimizing a Boolean function.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A function must have at least one input variable.
    #[error("number of variables must be positive")]
    NoVariables,

    /// Minterms are stored in a `u64`, so at most 64 variables are supported.
    #[error("too many variables: {num_vars} (at most {max} are supported)")]
    TooManyVariables { num_vars: usize, max: usize },

    /// A minterm does not fit in `num_vars` bits.
    #[error("minterm {minterm} is out of range for {num_vars} variables")]
    MintermOutOfRange { minterm: u64, num_vars: usize },

    /// Petrick's method produced more combinations than the configured budget.
    #[error("covering step exceeded its budget: {combinations} combinations (budget {budget})")]
    CoveringBudgetExceeded { combinations: usize, budget: usize },

    /// No candidate implicant covers this minterm.
    #[error("minterm {minterm} is not covered by any candidate implicant")]
    Uncoverable { minterm: u64 },

    /// An expression string could not be parsed.
    #[error("invalid expression: {0}")]
    InvalidExpression(String),
}

/// Result type for minimization operations.
pub type Result<T> = std::result::Result<T, Error>;
