use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    ops,
};

use ordered_float::OrderedFloat;

/// Represents a complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.imaginary.is_sign_negative() {
            write!(f, "({}-{}j)", self.real, -self.imaginary)
        } else {
            write!(f, "({}+{}j)", self.real, self.imaginary)
        }
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use cxcalc::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Returns `true` when both parts are zero (of either sign).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Returns the principal square root of the complex number.
    ///
    /// The result has a non-negative real part; on the negative real axis the
    /// sign of the imaginary part follows the sign of the input's imaginary
    /// part, so `-4+0j` maps to `2j` and `-4-0j` to `-2j`.
    ///
    /// Only the larger part comes from the half-angle formula; the smaller one
    /// is derived as `b / 2t`, which avoids cancellation when the parts differ
    /// greatly in magnitude.
    ///
    /// # Example
    /// ```
    /// use cxcalc::interpreter::value::complex::ComplexNumber;
    /// let s = ComplexNumber::new(-7.0, 24.0).sqrt();
    /// assert!((s.real - 3.0).abs() < 1e-10);
    /// assert!((s.imaginary - 4.0).abs() < 1e-10);
    ///
    /// let s = ComplexNumber::new(1e8, 1.0).sqrt();
    /// assert_eq!(s.real, 1e4);
    /// assert!((s.imaginary - 5e-5).abs() < 1e-18);
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        let a = self.real;
        let b = self.imaginary;

        if a == 0.0 && b == 0.0 {
            return Self { real:      0.0,
                          imaginary: b, };
        }

        let r = a.hypot(b);
        if a >= 0.0 {
            let t = f64::midpoint(r, a).sqrt();
            Self { real:      t,
                   imaginary: b / (2.0 * t), }
        } else {
            let t = ((r - a) / 2.0).sqrt();
            Self { real:      b.abs() / (2.0 * t),
                   imaginary: t.copysign(b), }
        }
    }

    /// Returns `true` when both parts are within `tolerance` of `other`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.real - other.real).abs() <= tolerance
        && (self.imaginary - other.imaginary).abs() <= tolerance
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real
                              .mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
               imaginary: self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real), }
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    /// Plain complex division. Callers check for a zero divisor first.
    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.real.mul_add(rhs.real, rhs.imaginary * rhs.imaginary);
        Self { real:      self.real.mul_add(rhs.real, self.imaginary * rhs.imaginary) / denom,
               imaginary: self.imaginary
                              .mul_add(rhs.real, -(self.real * rhs.imaginary))
                          / denom, }
    }
}

impl From<f64> for ComplexNumber {
    fn from(value: f64) -> Self {
        Self { real:      value,
               imaginary: 0.0, }
    }
}

impl From<(f64, f64)> for ComplexNumber {
    fn from((real, imaginary): (f64, f64)) -> Self {
        Self { real, imaginary }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for ComplexNumber {}

impl Hash for ComplexNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.real).hash(state);
        OrderedFloat(self.imaginary).hash(state);
    }
}
