use crate::interpreter::{
    evaluator::core::Evaluator,
    value::{complex::ComplexNumber, core::Value},
};

impl Evaluator<'_> {
    /// Negates a value, keeping its category.
    ///
    /// # Example
    /// ```
    /// use cxcalc::interpreter::{
    ///     evaluator::core::Evaluator,
    ///     value::{complex::ComplexNumber, core::Value},
    /// };
    ///
    /// assert_eq!(Evaluator::eval_negate(Value::Real(5.0)), Value::Real(-5.0));
    /// assert_eq!(Evaluator::eval_negate(Value::Complex(ComplexNumber::new(1.0, -2.0))),
    ///            Value::Complex(ComplexNumber::new(-1.0, 2.0)));
    /// ```
    #[must_use]
    pub fn eval_negate(value: Value) -> Value {
        match value {
            Value::Real(r) => Value::Real(-r),
            Value::Complex(c) => Value::Complex(-c),
        }
    }

    /// Computes the principal square root.
    ///
    /// - Non-negative reals return a real square root.
    /// - Negative reals return a purely imaginary complex result.
    /// - Complex values use their complex square root and stay complex.
    ///
    /// # Example
    /// ```
    /// use cxcalc::interpreter::{
    ///     evaluator::core::Evaluator,
    ///     value::{complex::ComplexNumber, core::Value},
    /// };
    ///
    /// assert_eq!(Evaluator::eval_sqrt(Value::Real(9.0)), Value::Real(3.0));
    /// assert_eq!(Evaluator::eval_sqrt(Value::Real(-4.0)),
    ///            Value::Complex(ComplexNumber::new(0.0, 2.0)));
    /// ```
    #[must_use]
    pub fn eval_sqrt(value: Value) -> Value {
        match value {
            Value::Real(x) if x >= 0.0 => Value::Real(x.sqrt()),
            Value::Real(x) => Value::Complex(ComplexNumber::new(0.0, (-x).sqrt())),
            Value::Complex(c) => Value::Complex(c.sqrt()),
        }
    }
}
