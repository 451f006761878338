use bigdecimal::BigDecimal;
use thiserror::Error;

/// Why an input source could not produce another token.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source has no more tokens.
    #[error("end of input")]
    EndOfInput,
    /// The underlying reader failed.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a descriptor cannot be used to bound a read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    /// The lower bound lies above the upper bound.
    #[error("min ({min}) is greater than max ({max})")]
    MinExceedsMax {
        /// The descriptor's lower bound.
        min: BigDecimal,
        /// The descriptor's upper bound.
        max: BigDecimal,
    },
    /// A bounded descriptor is missing one of its bounds.
    #[error("bounded descriptor is missing its {bound} bound")]
    MissingBound {
        /// `"min"` or `"max"`.
        bound: &'static str,
    },
}

/// Represents every failure that ends a read.
///
/// Malformed and out-of-range tokens never show up here; they are retried
/// inside the loop.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The descriptor was rejected before any input was read.
    #[error("invalid numeric descriptor: {0}")]
    DescriptorInvalid(#[from] DescriptorError),
    /// The input source ended or failed before a valid value arrived.
    #[error("input source exhausted: {0}")]
    SourceExhausted(#[from] SourceError),
    /// An in-range value could not be converted into the target kind, either
    /// because it had no fractional part to drop or because the truncated
    /// text failed to convert as well.
    #[error("cannot convert {text} to {kind}")]
    TruncationFailed {
        /// The plain decimal text of the last conversion attempt.
        text: String,
        /// Display name of the target kind.
        kind: &'static str,
    },
}

impl ReadError {
    /// Returns `true` for failures caused by the input rather than by the
    /// caller's configuration.
    #[must_use]
    pub const fn is_input_failure(&self) -> bool {
        !matches!(self, Self::DescriptorInvalid(_))
    }
}

/// Result type used by every read operation.
pub type ReadResult<T> = Result<T, ReadError>;
