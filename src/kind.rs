/// Range descriptors.
///
/// A [`descriptor::NumericKindDescriptor`] states whether a kind is bounded,
/// its inclusive range in exact decimal form, and whether it can hold a
/// fraction. Descriptors are built from static knowledge of a type, never
/// from run-time inspection.
pub mod descriptor;
/// Target types.
///
/// The [`numeric::Numeric`] trait and its implementations for the built-in
/// integer, floating-point and arbitrary precision types, plus the
/// [`numeric::NumericKind`] and [`numeric::Number`] tagged variants for
/// callers that choose the kind at run time.
pub mod numeric;
