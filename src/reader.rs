/// The read/validate loop.
///
/// Holds [`core::BoundedNumberReader`] and its configuration. The loop writes
/// the prompt, pulls one token, parses it as an exact decimal, checks it
/// against the descriptor and converts it into the target type, truncating a
/// fractional part the target cannot hold.
///
/// # Responsibilities
/// - Validates the descriptor before any input is read.
/// - Absorbs malformed and out-of-range tokens by prompting again.
/// - Surfaces only terminal failures to the caller.
pub mod core;
/// Numeral grammar for single tokens.
pub mod lexer;
/// Output sinks for prompts and diagnostics.
pub mod sink;
/// Token sources.
///
/// Defines the [`source::InputSource`] abstraction the loop reads from, plus a
/// line-buffered adapter for any `BufRead` and an in-memory token queue.
pub mod source;
