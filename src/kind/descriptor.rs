use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::error::DescriptorError;

/// Static description of a target numeric representation.
///
/// A descriptor is either unbounded (arbitrary precision integers and
/// decimals) or carries an inclusive `[min, max]` range in exact decimal form.
/// The read loop compares every parsed value against this range before it
/// tries to convert it.
///
/// Fields are public so callers can describe narrower ranges than a type's
/// natural one; [`NumericKindDescriptor::validate`] is run before every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericKindDescriptor {
    /// `true` if no range check applies.
    pub is_unbounded:      bool,
    /// Inclusive lower bound; present iff bounded.
    pub min:               Option<BigDecimal>,
    /// Inclusive upper bound; present iff bounded.
    pub max:               Option<BigDecimal>,
    /// `true` if the target can hold a fractional value as-is.
    pub supports_fraction: bool,
}

impl NumericKindDescriptor {
    /// Creates a descriptor that accepts any magnitude.
    #[must_use]
    pub const fn unbounded(supports_fraction: bool) -> Self {
        Self { is_unbounded: true,
               min: None,
               max: None,
               supports_fraction }
    }

    /// Creates a descriptor with the inclusive range `[min, max]`.
    ///
    /// The range is not checked here; an inverted range is reported as
    /// [`DescriptorError::MinExceedsMax`] when the descriptor is validated.
    #[must_use]
    pub const fn bounded(min: BigDecimal, max: BigDecimal, supports_fraction: bool) -> Self {
        Self { is_unbounded: false,
               min: Some(min),
               max: Some(max),
               supports_fraction }
    }

    /// Creates a bounded descriptor from a kind's natural extremes.
    ///
    /// If no natural minimum is known, or the known one is positive (the
    /// floating-point "smallest positive value" case), the range is taken to
    /// be symmetric and the minimum becomes `-max`. A natural minimum of zero
    /// or below is kept as-is.
    ///
    /// # Example
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use boundread::kind::descriptor::NumericKindDescriptor;
    ///
    /// let d = NumericKindDescriptor::derived(None, BigDecimal::from(127), false);
    /// assert_eq!(d.min, Some(BigDecimal::from(-127)));
    ///
    /// let d = NumericKindDescriptor::derived(Some(BigDecimal::from(0)), BigDecimal::from(255), false);
    /// assert_eq!(d.min, Some(BigDecimal::from(0)));
    /// ```
    #[must_use]
    pub fn derived(natural_min: Option<BigDecimal>, max: BigDecimal, supports_fraction: bool) -> Self {
        let min = match natural_min {
            Some(min) if min <= BigDecimal::zero() => min,
            _ => -max.clone(),
        };

        Self::bounded(min, max, supports_fraction)
    }

    /// Checks that a bounded descriptor has both bounds and that they are
    /// ordered.
    ///
    /// # Errors
    /// - `DescriptorError::MissingBound` if `min` or `max` is absent.
    /// - `DescriptorError::MinExceedsMax` if `min > max`.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.is_unbounded {
            return Ok(());
        }

        let (min, max) = self.bounds()?;
        if min > max {
            return Err(DescriptorError::MinExceedsMax { min: min.clone(),
                                                        max: max.clone(), });
        }
        Ok(())
    }

    /// Returns the inclusive bounds of a bounded descriptor.
    ///
    /// # Errors
    /// `DescriptorError::MissingBound` if either bound is absent.
    pub fn bounds(&self) -> Result<(&BigDecimal, &BigDecimal), DescriptorError> {
        let min = self.min.as_ref().ok_or(DescriptorError::MissingBound { bound: "min" })?;
        let max = self.max.as_ref().ok_or(DescriptorError::MissingBound { bound: "max" })?;
        Ok((min, max))
    }

    /// Returns `true` if `value` is acceptable under this descriptor.
    ///
    /// Unbounded descriptors accept everything. A bounded descriptor with a
    /// missing bound accepts nothing.
    #[must_use]
    pub fn contains(&self, value: &BigDecimal) -> bool {
        if self.is_unbounded {
            return true;
        }
        self.bounds().is_ok_and(|(min, max)| min <= value && value <= max)
    }
}
