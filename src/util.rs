/// Exact decimal helpers.
///
/// Parsing of single tokens into `BigDecimal`, truncation of plain decimal
/// text at the decimal point, and width estimates for plain forms. Nothing in
/// here goes through binary floating point.
pub mod num;
