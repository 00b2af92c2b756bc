use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    program::BinaryOperator,
};

impl Evaluator<'_> {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Two reals stay real. As soon as either operand is complex, both are
    /// promoted and the result is complex, even when its imaginary part ends
    /// up zero. Division by zero is checked explicitly for both categories
    /// instead of producing an infinity or NaN.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand (pushed first).
    /// - `right`: Right operand (pushed last).
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed number.
    ///
    /// # Example
    /// ```
    /// use cxcalc::{
    ///     error::RuntimeError,
    ///     interpreter::{
    ///         evaluator::core::Evaluator,
    ///         value::{complex::ComplexNumber, core::Value},
    ///     },
    ///     program::BinaryOperator,
    /// };
    ///
    /// let r = Evaluator::eval_binary(BinaryOperator::Sub, Value::Real(1.5), Value::Real(2.0));
    /// assert_eq!(r, Ok(Value::Real(-0.5)));
    ///
    /// let c = Value::Complex(ComplexNumber::new(0.0, 1.0));
    /// let r = Evaluator::eval_binary(BinaryOperator::Mul, c, c);
    /// assert_eq!(r, Ok(Value::Complex(ComplexNumber::new(-1.0, 0.0))));
    ///
    /// let r = Evaluator::eval_binary(BinaryOperator::Div, Value::Real(1.0), Value::Real(0.0));
    /// assert_eq!(r, Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        match (left, right) {
            (Value::Real(left), Value::Real(right)) => {
                Ok(Value::Real(match op {
                                   Add => left + right,
                                   Sub => left - right,
                                   Mul => left * right,
                                   Div => {
                                       if right == 0.0 {
                                           return Err(RuntimeError::DivisionByZero);
                                       }
                                       left / right
                                   },
                               }))
            },
            (left, right) => {
                let left = left.as_complex();
                let right = right.as_complex();

                Ok(Value::Complex(match op {
                                      Add => left + right,
                                      Sub => left - right,
                                      Mul => left * right,
                                      Div => {
                                          if right.is_zero() {
                                              return Err(RuntimeError::DivisionByZero);
                                          }
                                          left / right
                                      },
                                  }))
            },
        }
    }
}
