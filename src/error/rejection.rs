use bigdecimal::BigDecimal;
use thiserror::Error;

use crate::util::num::display_decimal;

/// Why the read loop refused a token and prompted again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The token is not a decimal numeral.
    #[error("\"{token}\" is not a decimal number")]
    MalformedToken {
        /// The token as read.
        token: String,
    },
    /// The value lies outside the descriptor's inclusive range.
    #[error("{} is outside [{}, {}]",
            display_decimal(.value),
            display_decimal(.min),
            display_decimal(.max))]
    OutOfRange {
        /// The parsed value.
        value: BigDecimal,
        /// Inclusive lower bound.
        min:   BigDecimal,
        /// Inclusive upper bound.
        max:   BigDecimal,
    },
    /// The plain form of the value is longer than the configured limit.
    #[error("\"{token}\" needs {width} digits, the limit is {limit}")]
    TooWide {
        /// The token as read.
        token: String,
        /// Characters in the plain form.
        width: u128,
        /// Configured limit.
        limit: u64,
    },
}
