use logos::Logos;

/// Lexical classes of a single input token.
///
/// Input is already split on whitespace before it reaches this lexer, so the
/// grammar only has to decide whether a whole token is a decimal numeral.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Numeral {
    /// Decimal numerals, such as `42`, `-3.14`, `.5`, `7.` or `+2.1e-10`.
    #[regex(r"[+-]?[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[+-]?[0-9]+([eE][+-]?[0-9]+)?")]
    Decimal,
}

/// Returns `true` if the whole token is exactly one decimal numeral.
///
/// # Example
/// ```
/// use boundread::reader::lexer::is_decimal_numeral;
///
/// assert!(is_decimal_numeral("-3.5e2"));
/// assert!(!is_decimal_numeral("3.5.5"));
/// assert!(!is_decimal_numeral("0x1F"));
/// assert!(!is_decimal_numeral(""));
/// ```
#[must_use]
pub fn is_decimal_numeral(token: &str) -> bool {
    let mut lexer = Numeral::lexer(token);

    match lexer.next() {
        Some(Ok(Numeral::Decimal)) => lexer.span().end == token.len() && lexer.next().is_none(),
        _ => false,
    }
}
