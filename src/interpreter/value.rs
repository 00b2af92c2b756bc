/// Complex number support.
///
/// Defines the `ComplexNumber` type used for arithmetic with real and imaginary
/// parts, including the principal square root used by `sqrt`.
pub mod complex;

/// The runtime numeric value.
///
/// Defines `Value`, the tagged union of real and complex numbers, together
/// with the promotion rule that turns a real into a complex number whenever
/// the other operand is complex.
pub mod core;
