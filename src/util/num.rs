use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Zero, pow};

use crate::reader::lexer::is_decimal_numeral;

/// Parses a single token as an exact decimal.
///
/// The token must be a plain decimal numeral as a whole: an optional sign,
/// digits with an optional fractional part, and an optional exponent.
/// Anything else (digit separators, hexadecimal, `NaN`, `inf`) yields `None`.
///
/// # Example
/// ```
/// use boundread::util::num::parse_decimal;
///
/// assert!(parse_decimal("-12.50").is_some());
/// assert!(parse_decimal("2.5e-3").is_some());
/// assert!(parse_decimal("1_000").is_none());
/// assert!(parse_decimal("NaN").is_none());
/// ```
#[must_use]
pub fn parse_decimal(token: &str) -> Option<BigDecimal> {
    if !is_decimal_numeral(token) {
        return None;
    }
    BigDecimal::from_str(token).ok()
}

/// Splits an exact decimal into its integral part, truncated toward zero,
/// and whether a non-zero fraction was dropped to get there.
///
/// Works on the unscaled digits, so values like `1e-999999999` are cut
/// without ever expanding them. The integral part always has a scale of
/// zero or less.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use boundread::util::num::integral_part;
///
/// let (int, dropped) = integral_part(&BigDecimal::from_str("-3.789").unwrap());
/// assert_eq!((int, dropped), (BigDecimal::from(-3), true));
///
/// let (int, dropped) = integral_part(&BigDecimal::from_str("3.000").unwrap());
/// assert_eq!((int.to_string(), dropped), ("3".to_string(), false));
///
/// let (int, dropped) = integral_part(&BigDecimal::from_str("1e-9000000000000000000").unwrap());
/// assert_eq!((int, dropped), (BigDecimal::from(0), true));
/// ```
#[must_use]
pub fn integral_part(value: &BigDecimal) -> (BigDecimal, bool) {
    let (unscaled, scale) = value.as_bigint_and_exponent();
    if unscaled.is_zero() {
        return (BigDecimal::zero(), false);
    }
    if scale <= 0 {
        return (value.clone(), false);
    }

    let Ok(shift) = usize::try_from(scale) else {
        return (BigDecimal::zero(), true);
    };
    // Every digit sits behind the point.
    if u64::try_from(shift).is_ok_and(|shift| shift >= value.digits()) {
        return (BigDecimal::zero(), true);
    }

    let divisor = pow(BigInt::from(10), shift);
    let quotient = &unscaled / &divisor;
    let remainder = &unscaled % &divisor;
    (BigDecimal::new(quotient, 0), !remainder.is_zero())
}

/// Renders `value` as `<digits>e<exponent>`, a form whose length depends only
/// on the number of significant digits.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use boundread::util::num::exponent_form;
///
/// assert_eq!(exponent_form(&BigDecimal::from_str("-3.75").unwrap()), "-375e-2");
/// assert_eq!(exponent_form(&BigDecimal::from_str("1e-9000000000000000000").unwrap()),
///            "1e-9000000000000000000");
/// ```
#[must_use]
pub fn exponent_form(value: &BigDecimal) -> String {
    let (unscaled, scale) = value.as_bigint_and_exponent();
    format!("{unscaled}e{}", -i128::from(scale))
}

/// Longest plain form [`display_decimal`] renders before switching to
/// [`exponent_form`].
pub const PLAIN_DISPLAY_LIMIT: u128 = 4096;

/// Renders `value` in plain form when that stays short, in exponent form
/// otherwise. Used wherever accepted or rejected input is shown.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use boundread::util::num::display_decimal;
///
/// assert_eq!(display_decimal(&BigDecimal::from_str("1.5e3").unwrap()), "1500");
/// assert_eq!(display_decimal(&BigDecimal::from_str("-1e999999999").unwrap()), "-1e999999999");
/// ```
#[must_use]
pub fn display_decimal(value: &BigDecimal) -> String {
    if plain_width(value) <= PLAIN_DISPLAY_LIMIT {
        value.to_plain_string()
    } else {
        exponent_form(value)
    }
}

/// Number of characters the plain form of `value` would take, sign
/// excluded, computed without building the string.
///
/// Used to refuse tokens like `1e999999999` before their plain form is ever
/// rendered.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use boundread::util::num::plain_width;
///
/// assert_eq!(plain_width(&BigDecimal::from_str("1e3").unwrap()), 4);
/// assert_eq!(plain_width(&BigDecimal::from_str("12.25").unwrap()), 5);
/// assert_eq!(plain_width(&BigDecimal::from_str("0.001").unwrap()), 5);
/// ```
#[must_use]
pub fn plain_width(value: &BigDecimal) -> u128 {
    let (_, scale) = value.as_bigint_and_exponent();
    let digits = i128::from(value.digits());
    let scale = i128::from(scale);

    let integral = (digits - scale).max(1);
    let fractional = scale.max(0);
    // A positive scale also adds the decimal point.
    let point = i128::from(scale > 0);

    (integral + fractional + point).unsigned_abs()
}
