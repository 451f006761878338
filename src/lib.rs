//! # boundread
//!
//! boundread reads numbers of a caller-chosen type from a token stream.
//! Each token is parsed as an exact decimal, checked against the type's
//! representable range and converted; anything malformed or out of range is
//! dropped and the prompt is repeated until a valid value arrives or the
//! input runs out.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ReadResult,
    kind::numeric::{Number, NumericKind},
    reader::{core::BoundedNumberReader, sink::OutputSink, source::InputSource},
};

/// Provides the error types of the crate.
///
/// Separates terminal failures, which end a read and reach the caller, from
/// recoverable rejections, which only cause the loop to prompt again.
///
/// # Responsibilities
/// - Defines `ReadError` and the source and descriptor errors it wraps.
/// - Defines `Rejection`, the reasons a single token is refused.
pub mod error;
/// Describes the numeric kinds a read can target.
///
/// # Responsibilities
/// - Declares range descriptors and the symmetric-range derivation.
/// - Declares the `Numeric` trait and the built-in kinds implementing it.
pub mod kind;
/// Runs the read/validate/retry loop against abstract input and output.
///
/// # Responsibilities
/// - Tokenizes input sources and recognises decimal numerals.
/// - Prompts, validates and converts, applying the truncation policy.
/// - Keeps console specifics out of the loop through the source and sink
///   traits.
pub mod reader;
/// General helpers for exact decimal handling.
pub mod util;

/// Reads a number of the given kind with the default configuration.
///
/// # Errors
/// Returns an error if the input ends before a valid value is read, or if an
/// accepted value cannot be converted into `kind`.
///
/// # Examples
/// ```
/// use boundread::{
///     kind::numeric::{Number, NumericKind},
///     read_number,
///     reader::source::Tokens,
/// };
///
/// let mut input: Tokens = ["abc", "xyz", "42"].into_iter().collect();
/// let mut output: Vec<String> = Vec::new();
///
/// let n = read_number("Enter a BigInteger: ", &mut input, &mut output, NumericKind::BigInteger).unwrap();
/// assert_eq!(n.to_string(), "42");
/// assert_eq!(n.kind(), NumericKind::BigInteger);
///
/// // Nothing left to read.
/// assert!(read_number("again: ", &mut input, &mut output, NumericKind::I32).is_err());
/// ```
pub fn read_number(prompt: &str,
                   input: &mut impl InputSource,
                   output: &mut impl OutputSink,
                   kind: NumericKind)
                   -> ReadResult<Number> {
    BoundedNumberReader::default().read_number(prompt, input, output, kind)
}
