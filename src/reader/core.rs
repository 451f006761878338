use bigdecimal::BigDecimal;
use log::{debug, trace};
use num_bigint::BigInt;

use crate::{
    error::{ReadError, ReadResult, Rejection},
    kind::{
        descriptor::NumericKindDescriptor,
        numeric::{Number, Numeric, NumericKind},
    },
    reader::{sink::OutputSink, source::InputSource},
    util::num::{display_decimal, integral_part, parse_decimal, plain_width},
};

/// Behaviour switches of a [`BoundedNumberReader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Write `min: .. max: ..` once before reading a bounded kind.
    pub show_range:      bool,
    /// Write one line per rejected token explaining the rejection.
    pub echo_rejections: bool,
    /// Refuse values whose plain form is longer than this many characters.
    pub digit_limit:     Option<u64>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { show_range:      true,
               echo_rejections: false,
               digit_limit:     None, }
    }
}

impl ReaderConfig {
    /// Sets [`ReaderConfig::show_range`].
    #[must_use]
    pub const fn with_show_range(mut self, show_range: bool) -> Self {
        self.show_range = show_range;
        self
    }

    /// Sets [`ReaderConfig::echo_rejections`].
    #[must_use]
    pub const fn with_echo_rejections(mut self, echo_rejections: bool) -> Self {
        self.echo_rejections = echo_rejections;
        self
    }

    /// Sets [`ReaderConfig::digit_limit`].
    #[must_use]
    pub const fn with_digit_limit(mut self, digit_limit: Option<u64>) -> Self {
        self.digit_limit = digit_limit;
        self
    }
}

/// Reads numbers from a token stream until one fits the target kind.
///
/// Every token is parsed as an exact decimal and compared against the
/// descriptor's range without any floating-point detour. Malformed and
/// out-of-range tokens are dropped and the prompt is repeated; the loop has
/// no iteration limit and only ends on a valid value or a terminal
/// [`ReadError`].
///
/// # Example
/// ```
/// use boundread::reader::{core::BoundedNumberReader, source::Tokens};
///
/// let reader = BoundedNumberReader::default();
/// let mut input: Tokens = ["abc", "300", "-5"].into_iter().collect();
/// let mut output: Vec<String> = Vec::new();
///
/// let value: i8 = reader.read_as("Enter a i8: ", &mut input, &mut output).unwrap();
/// assert_eq!(value, -5);
/// // Range line, then one prompt per token.
/// assert_eq!(output.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoundedNumberReader {
    config: ReaderConfig,
}

impl BoundedNumberReader {
    /// Creates a reader with the given configuration.
    #[must_use]
    pub const fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// The reader's configuration.
    #[must_use]
    pub const fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Reads a value of `T` bounded by `T`'s own descriptor.
    ///
    /// # Errors
    /// See [`BoundedNumberReader::read`].
    pub fn read_as<T: Numeric>(&self,
                               prompt: &str,
                               input: &mut impl InputSource,
                               output: &mut impl OutputSink)
                               -> ReadResult<T> {
        self.read(prompt, input, output, &T::descriptor())
    }

    /// Reads a value of `T` bounded by `descriptor`.
    ///
    /// The descriptor is validated before anything is written. Then the loop
    /// prompts, reads one token, parses it, checks the range and converts. A
    /// value with a fractional part that `T` cannot hold is truncated at the
    /// decimal point (no rounding) and converted once more.
    ///
    /// # Errors
    /// - `ReadError::DescriptorInvalid` if `descriptor` is inconsistent.
    /// - `ReadError::SourceExhausted` if `input` ends or fails.
    /// - `ReadError::TruncationFailed` if an accepted value cannot be
    ///   converted into `T`, even after truncation.
    pub fn read<T: Numeric>(&self,
                            prompt: &str,
                            input: &mut impl InputSource,
                            output: &mut impl OutputSink,
                            descriptor: &NumericKindDescriptor)
                            -> ReadResult<T> {
        descriptor.validate()?;

        if self.config.show_range
           && !descriptor.is_unbounded
           && let Ok((min, max)) = descriptor.bounds()
        {
            output.write_line(&format!("min: {}\tmax: {}",
                                       display_decimal(min),
                                       display_decimal(max)));
        }

        let value = loop {
            output.write_prompt(prompt);

            let token = input.next_token()?;
            trace!("read token {token:?} for {}", T::NAME);

            match self.accept(token, descriptor) {
                Ok(value) => break value,
                Err(rejection) => {
                    debug!("rejected input for {}: {rejection}", T::NAME);
                    if self.config.echo_rejections {
                        output.write_line(&rejection.to_string());
                    }
                },
            }
        };

        materialize(&value)
    }

    /// Reads a value of a kind chosen at run time.
    ///
    /// # Errors
    /// See [`BoundedNumberReader::read`].
    pub fn read_number(&self,
                       prompt: &str,
                       input: &mut impl InputSource,
                       output: &mut impl OutputSink,
                       kind: NumericKind)
                       -> ReadResult<Number> {
        match kind {
            NumericKind::I8 => self.read_as::<i8>(prompt, input, output).map(Number::from),
            NumericKind::I16 => self.read_as::<i16>(prompt, input, output).map(Number::from),
            NumericKind::I32 => self.read_as::<i32>(prompt, input, output).map(Number::from),
            NumericKind::I64 => self.read_as::<i64>(prompt, input, output).map(Number::from),
            NumericKind::U8 => self.read_as::<u8>(prompt, input, output).map(Number::from),
            NumericKind::U16 => self.read_as::<u16>(prompt, input, output).map(Number::from),
            NumericKind::U32 => self.read_as::<u32>(prompt, input, output).map(Number::from),
            NumericKind::U64 => self.read_as::<u64>(prompt, input, output).map(Number::from),
            NumericKind::F32 => self.read_as::<f32>(prompt, input, output).map(Number::from),
            NumericKind::F64 => self.read_as::<f64>(prompt, input, output).map(Number::from),
            NumericKind::BigInteger => {
                self.read_as::<BigInt>(prompt, input, output).map(Number::from)
            },
            NumericKind::BigDecimal => {
                self.read_as::<BigDecimal>(prompt, input, output).map(Number::from)
            },
        }
    }

    /// Decides whether one token ends the loop.
    fn accept(&self, token: String, descriptor: &NumericKindDescriptor) -> Result<BigDecimal, Rejection> {
        let Some(value) = parse_decimal(&token) else {
            return Err(Rejection::MalformedToken { token });
        };

        if let Some(limit) = self.config.digit_limit {
            let width = plain_width(&value);
            if width > u128::from(limit) {
                return Err(Rejection::TooWide { token, width, limit });
            }
        }

        if !descriptor.is_unbounded
           && let Ok((min, max)) = descriptor.bounds()
           && (value < *min || value > *max)
        {
            return Err(Rejection::OutOfRange { value,
                                               min: min.clone(),
                                               max: max.clone() });
        }

        Ok(value)
    }
}

/// Converts an accepted decimal into `T`, truncating the fractional part once
/// if `T` refuses it.
fn materialize<T: Numeric>(value: &BigDecimal) -> ReadResult<T> {
    if let Some(v) = T::from_decimal(value) {
        return Ok(v);
    }

    let (integral, has_fraction) = integral_part(value);
    if !has_fraction {
        return Err(ReadError::TruncationFailed { text: display_decimal(value),
                                                 kind: T::NAME, });
    }

    debug!("truncating {} to {} for {}",
           display_decimal(value),
           display_decimal(&integral),
           T::NAME);
    T::from_decimal(&integral).ok_or_else(|| ReadError::TruncationFailed { text: display_decimal(&integral),
                                                                           kind: T::NAME, })
}
