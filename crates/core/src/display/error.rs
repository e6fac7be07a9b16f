//! Formatting error types.

use thiserror::Error;
use venturehub_shared::types::Currency;

/// Errors raised while deriving display values.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A funding goal of zero (or below) has no meaningful percentage.
    #[error("Funding goal must be greater than zero")]
    ZeroGoal,

    /// Arithmetic on a snapshot value left the decimal range.
    #[error("Value out of range: {0}")]
    Overflow(&'static str),

    /// Raised and goal amounts are in different currencies.
    #[error("Funding amounts mix currencies: raised in {raised}, goal in {goal}")]
    CurrencyMismatch {
        /// Currency of the raised amount.
        raised: Currency,
        /// Currency of the goal.
        goal: Currency,
    },

    /// Date string is not `YYYY-MM-DD`.
    #[error("Invalid ISO date {input:?}: {source}")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// Parser failure.
        #[source]
        source: chrono::ParseError,
    },
}
