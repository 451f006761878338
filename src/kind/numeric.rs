use std::{fmt, str::FromStr};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use thiserror::Error;

use crate::{
    kind::descriptor::NumericKindDescriptor,
    util::num::{display_decimal, exponent_form, integral_part},
};

/// A type the read loop can produce.
///
/// Implementors describe their own range and know how to build a value from
/// an accepted decimal. The read loop only hands over values that passed the
/// range check, and hands integral kinds their truncated integral part.
pub trait Numeric: Sized {
    /// Display name used in prompts, errors and logs.
    const NAME: &'static str;

    /// Range and fraction support of this type.
    fn descriptor() -> NumericKindDescriptor;

    /// Builds a value from plain decimal text.
    ///
    /// Returns `None` if the text cannot be represented, typically because it
    /// has a fractional part and the type is integral.
    fn from_plain(text: &str) -> Option<Self>;

    /// Builds a value from an exact decimal.
    ///
    /// The default refuses any value with a non-zero fraction and hands the
    /// plain form of the rest to [`Numeric::from_plain`], so a tiny value such
    /// as `1e-999999999` is never expanded. Kinds that hold fractions override
    /// it.
    fn from_decimal(value: &BigDecimal) -> Option<Self> {
        let (integral, has_fraction) = integral_part(value);
        if has_fraction {
            return None;
        }
        Self::from_plain(&integral.to_plain_string())
    }
}

/// The closed set of built-in numeric kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// Arbitrary precision integer.
    BigInteger,
    /// Arbitrary precision decimal.
    BigDecimal,
}

impl NumericKind {
    /// Every built-in kind, in declaration order.
    pub const ALL: [Self; 12] = [Self::I8,
                                 Self::I16,
                                 Self::I32,
                                 Self::I64,
                                 Self::U8,
                                 Self::U16,
                                 Self::U32,
                                 Self::U64,
                                 Self::F32,
                                 Self::F64,
                                 Self::BigInteger,
                                 Self::BigDecimal];

    /// Display name of the kind, identical to its type's [`Numeric::NAME`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => i8::NAME,
            Self::I16 => i16::NAME,
            Self::I32 => i32::NAME,
            Self::I64 => i64::NAME,
            Self::U8 => u8::NAME,
            Self::U16 => u16::NAME,
            Self::U32 => u32::NAME,
            Self::U64 => u64::NAME,
            Self::F32 => f32::NAME,
            Self::F64 => f64::NAME,
            Self::BigInteger => BigInt::NAME,
            Self::BigDecimal => BigDecimal::NAME,
        }
    }

    /// Static descriptor of the kind.
    ///
    /// # Example
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use boundread::kind::numeric::NumericKind;
    ///
    /// let d = NumericKind::I8.descriptor();
    /// assert_eq!(d.min, Some(BigDecimal::from(-128)));
    /// assert_eq!(d.max, Some(BigDecimal::from(127)));
    /// assert!(NumericKind::BigInteger.descriptor().is_unbounded);
    /// ```
    #[must_use]
    pub fn descriptor(self) -> NumericKindDescriptor {
        match self {
            Self::I8 => i8::descriptor(),
            Self::I16 => i16::descriptor(),
            Self::I32 => i32::descriptor(),
            Self::I64 => i64::descriptor(),
            Self::U8 => u8::descriptor(),
            Self::U16 => u16::descriptor(),
            Self::U32 => u32::descriptor(),
            Self::U64 => u64::descriptor(),
            Self::F32 => f32::descriptor(),
            Self::F64 => f64::descriptor(),
            Self::BigInteger => BigInt::descriptor(),
            Self::BigDecimal => BigDecimal::descriptor(),
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a kind name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown numeric kind \"{0}\"; expected one of i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bigint, bigdecimal")]
pub struct UnknownKind(pub String);

impl FromStr for NumericKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "i8" | "byte" => Ok(Self::I8),
            "i16" | "short" => Ok(Self::I16),
            "i32" | "int" | "integer" => Ok(Self::I32),
            "i64" | "long" => Ok(Self::I64),
            "u8" => Ok(Self::U8),
            "u16" => Ok(Self::U16),
            "u32" => Ok(Self::U32),
            "u64" => Ok(Self::U64),
            "f32" | "float" => Ok(Self::F32),
            "f64" | "double" => Ok(Self::F64),
            "bigint" | "biginteger" => Ok(Self::BigInteger),
            "bigdecimal" | "decimal" => Ok(Self::BigDecimal),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// A value of one of the built-in kinds, for callers that pick the kind at
/// run time.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// `i8` value.
    I8(i8),
    /// `i16` value.
    I16(i16),
    /// `i32` value.
    I32(i32),
    /// `i64` value.
    I64(i64),
    /// `u8` value.
    U8(u8),
    /// `u16` value.
    U16(u16),
    /// `u32` value.
    U32(u32),
    /// `u64` value.
    U64(u64),
    /// `f32` value.
    F32(f32),
    /// `f64` value.
    F64(f64),
    /// Arbitrary precision integer value.
    BigInteger(BigInt),
    /// Arbitrary precision decimal value.
    BigDecimal(BigDecimal),
}

impl Number {
    /// The kind this value belongs to.
    #[must_use]
    pub const fn kind(&self) -> NumericKind {
        match self {
            Self::I8(_) => NumericKind::I8,
            Self::I16(_) => NumericKind::I16,
            Self::I32(_) => NumericKind::I32,
            Self::I64(_) => NumericKind::I64,
            Self::U8(_) => NumericKind::U8,
            Self::U16(_) => NumericKind::U16,
            Self::U32(_) => NumericKind::U32,
            Self::U64(_) => NumericKind::U64,
            Self::F32(_) => NumericKind::F32,
            Self::F64(_) => NumericKind::F64,
            Self::BigInteger(_) => NumericKind::BigInteger,
            Self::BigDecimal(_) => NumericKind::BigDecimal,
        }
    }
}

/// Prints the value as plain decimal text. Only a `BigDecimal` whose plain
/// form would exceed
/// [`PLAIN_DISPLAY_LIMIT`](crate::util::num::PLAIN_DISPLAY_LIMIT) characters falls back to
/// exponent form.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::BigInteger(v) => write!(f, "{v}"),
            Self::BigDecimal(v) => f.write_str(&display_decimal(v)),
        }
    }
}

macro_rules! integer_numeric {
    ($($ty:ty => $variant:ident, $name:literal;)*) => {
        $(
            impl Numeric for $ty {
                const NAME: &'static str = $name;

                fn descriptor() -> NumericKindDescriptor {
                    NumericKindDescriptor::bounded(BigDecimal::from(<$ty>::MIN),
                                                   BigDecimal::from(<$ty>::MAX),
                                                   false)
                }

                fn from_plain(text: &str) -> Option<Self> {
                    text.parse().ok()
                }
            }

            impl From<$ty> for Number {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

integer_numeric! {
    i8 => I8, "i8";
    i16 => I16, "i16";
    i32 => I32, "i32";
    i64 => I64, "i64";
    u8 => U8, "u8";
    u16 => U16, "u16";
    u32 => U32, "u32";
    u64 => U64, "u64";
}

// Extremes as `(digits, scale)`: the shortest round-trip form of `MAX` and
// the smallest positive subnormal. The latter is positive, so the derived
// range is symmetric.
macro_rules! float_numeric {
    ($($ty:ty => $variant:ident, $name:literal, $max:expr, $min_positive:expr;)*) => {
        $(
            impl Numeric for $ty {
                const NAME: &'static str = $name;

                fn descriptor() -> NumericKindDescriptor {
                    let (max, max_scale) = $max;
                    let (min_positive, min_scale) = $min_positive;
                    NumericKindDescriptor::derived(Some(BigDecimal::new(BigInt::from(min_positive), min_scale)),
                                                   BigDecimal::new(BigInt::from(max), max_scale),
                                                   true)
                }

                fn from_plain(text: &str) -> Option<Self> {
                    text.parse::<Self>().ok().filter(|v| v.is_finite())
                }

                fn from_decimal(value: &BigDecimal) -> Option<Self> {
                    Self::from_plain(&exponent_form(value))
                }
            }

            impl From<$ty> for Number {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

float_numeric! {
    f32 => F32, "f32", (34_028_235_u64, -31), (14_u64, 46);
    f64 => F64, "f64", (17_976_931_348_623_157_u64, -292), (49_u64, 325);
}

impl Numeric for BigInt {
    const NAME: &'static str = "BigInteger";

    fn descriptor() -> NumericKindDescriptor {
        NumericKindDescriptor::unbounded(false)
    }

    fn from_plain(text: &str) -> Option<Self> {
        Self::from_str(text).ok()
    }
}

impl From<BigInt> for Number {
    fn from(v: BigInt) -> Self {
        Self::BigInteger(v)
    }
}

impl Numeric for BigDecimal {
    const NAME: &'static str = "BigDecimal";

    fn descriptor() -> NumericKindDescriptor {
        NumericKindDescriptor::unbounded(true)
    }

    fn from_plain(text: &str) -> Option<Self> {
        Self::from_str(text).ok()
    }

    fn from_decimal(value: &BigDecimal) -> Option<Self> {
        Some(value.clone())
    }
}

impl From<BigDecimal> for Number {
    fn from(v: BigDecimal) -> Self {
        Self::BigDecimal(v)
    }
}
