use std::{collections::VecDeque, io::BufRead};

use crate::error::SourceError;

/// A stream of whitespace-delimited tokens.
///
/// `next_token` both returns and consumes a token, so a caller that drops the
/// returned string has discarded exactly one token and the stream has moved
/// on. Exhaustion and read failures are reported as [`SourceError`] and are
/// never retried by the reader.
pub trait InputSource {
    /// Returns the next token and advances past it.
    ///
    /// # Errors
    /// `SourceError::EndOfInput` when no tokens remain, `SourceError::Io` when
    /// the underlying reader fails.
    fn next_token(&mut self) -> Result<String, SourceError>;
}

impl<S: InputSource + ?Sized> InputSource for &mut S {
    fn next_token(&mut self) -> Result<String, SourceError> {
        (**self).next_token()
    }
}

/// Tokenizes any buffered reader one line at a time.
///
/// A line is only read once every token of the previous line has been
/// handed out, so an interactive reader blocks exactly when the loop needs
/// more input. Lines are split on ASCII whitespace as raw bytes; bytes that
/// are not valid UTF-8 become `U+FFFD` inside their token, which the reader
/// then rejects like any other malformed token.
pub struct TokenReader<R> {
    reader:  R,
    pending: VecDeque<String>,
    line:    Vec<u8>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self { reader,
               pending: VecDeque::new(),
               line: Vec::new() }
    }
}

impl<R: BufRead> InputSource for TokenReader<R> {
    fn next_token(&mut self) -> Result<String, SourceError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Err(SourceError::EndOfInput);
            }
            self.pending.extend(self.line
                                    .split(u8::is_ascii_whitespace)
                                    .filter(|piece| !piece.is_empty())
                                    .map(|piece| String::from_utf8_lossy(piece).into_owned()));
        }
    }
}

/// An in-memory queue of tokens.
///
/// # Example
/// ```
/// use boundread::reader::source::{InputSource, Tokens};
///
/// let mut tokens: Tokens = "12 abc".split_whitespace().collect();
/// assert_eq!(tokens.next_token().unwrap(), "12");
/// assert_eq!(tokens.next_token().unwrap(), "abc");
/// assert!(tokens.next_token().is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Tokens {
    queue: VecDeque<String>,
}

impl Tokens {
    /// Number of tokens left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl<S: Into<String>> FromIterator<S> for Tokens {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { queue: iter.into_iter().map(Into::into).collect() }
    }
}

impl InputSource for Tokens {
    fn next_token(&mut self) -> Result<String, SourceError> {
        self.queue.pop_front().ok_or(SourceError::EndOfInput)
    }
}
