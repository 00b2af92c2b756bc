use std::fmt::Display;

use crate::interpreter::value::complex::ComplexNumber;

/// Represents a runtime value in the interpreter.
///
/// Arithmetic is closed under promotion: any operation with a `Complex`
/// operand yields `Complex`, and `Real` results only ever come from `Real`
/// operands. The one exception is `sqrt` of a negative real, which promotes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A real number (double precision floating-point).
    Real(f64),
    /// A complex number (with real and imaginary parts).
    Complex(ComplexNumber),
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Complex(c) => write!(f, "{c}"),
        }
    }
}

impl Value {
    /// Converts the value to `ComplexNumber`.
    ///
    /// Reals become complex numbers with a zero imaginary part.
    ///
    /// # Example
    /// ```
    /// use cxcalc::interpreter::value::{complex::ComplexNumber, core::Value};
    ///
    /// assert_eq!(Value::Real(2.0).as_complex(), ComplexNumber::new(2.0, 0.0));
    /// ```
    #[must_use]
    pub const fn as_complex(&self) -> ComplexNumber {
        match self {
            Self::Complex(c) => *c,
            Self::Real(r) => ComplexNumber::new(*r, 0.0),
        }
    }

    /// Returns the real payload, or `None` for complex values.
    #[must_use]
    pub const fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(r) => Some(*r),
            Self::Complex(_) => None,
        }
    }

    /// Returns `true` if the value is complex.
    #[must_use]
    pub const fn is_complex(&self) -> bool {
        matches!(self, Self::Complex(_))
    }

    /// Compares two values within an absolute `tolerance`.
    ///
    /// A real and a complex value compare equal when the complex one has a
    /// negligible imaginary part.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        match (self, other) {
            (Self::Real(a), Self::Real(b)) => (a - b).abs() <= tolerance,
            _ => self.as_complex().approx_eq(&other.as_complex(), tolerance),
        }
    }
}
