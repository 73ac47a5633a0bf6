//! Budget error types.

use finbot_shared::AppError;
use thiserror::Error;

/// The budget payload is malformed or violates an input rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Payload is not valid JSON or not shaped like a budget.
    #[error("Malformed budget: {0}")]
    Malformed(String),

    /// A required field is absent.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A field that must be a number holds something else.
    #[error("Field '{field}' must be a number")]
    NotNumeric {
        /// Field path, e.g. `income` or `expenses.food`.
        field: String,
    },

    /// A field that must be non-negative is negative.
    #[error("Field '{field}' cannot be negative")]
    Negative {
        /// Field path, e.g. `income` or `expenses.food`.
        field: String,
    },

    /// A number is too large to represent as an amount.
    #[error("Field '{field}' is out of range")]
    OutOfRange {
        /// Field path, e.g. `income` or `expenses.food`.
        field: String,
    },

    /// The same category is declared twice.
    #[error("Duplicate expense category: {0}")]
    DuplicateCategory(String),

    /// Savings goal is negative.
    #[error("Savings goal cannot be negative")]
    NegativeGoal,
}

/// A derived metric is mathematically undefined for the declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComputationError {
    /// Income is zero, so ratios against income are undefined.
    #[error("Income is zero; savings rate and health score are undefined")]
    ZeroIncome,

    /// An intermediate value exceeded the representable range.
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

/// Budget-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Input was valid but a metric could not be computed.
    #[error(transparent)]
    Computation(#[from] ComputationError),
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::Validation(e) => Self::Validation(e.to_string()),
            BudgetError::Computation(e) => Self::BusinessRule(e.to_string()),
        }
    }
}
