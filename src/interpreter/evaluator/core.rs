use log::{debug, trace};

use crate::{
    error::{Diagnostic, RuntimeError},
    interpreter::{environment::Environment, value::core::Value},
    program::Instruction,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes postfix code on a value stack.
///
/// The evaluator only reads the environment. Writing an assignment's result is
/// left to the caller, so a failing statement never changes any variable.
pub struct Evaluator<'a> {
    environment: &'a Environment,
    diagnostics: &'a mut Vec<Diagnostic>,
    stack:       Vec<Value>,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator with an empty stack.
    ///
    /// Recoverable conditions found while running are appended to
    /// `diagnostics`.
    pub fn new(environment: &'a Environment, diagnostics: &'a mut Vec<Diagnostic>) -> Self {
        Self { environment,
               diagnostics,
               stack: Vec::new() }
    }

    /// Runs `code` from start to finish and returns the single value it
    /// leaves on the stack.
    ///
    /// # Errors
    /// - `DivisionByZero` if any division has a zero divisor.
    /// - `StackUnderflow` / `UnbalancedStack` if `code` is malformed. The
    ///   parser never produces such code.
    pub fn run(mut self, code: &[Instruction]) -> EvalResult<Value> {
        for (position, instruction) in code.iter().enumerate() {
            trace!("exec {instruction} with stack {:?}", self.stack);
            self.step(position, instruction)?;
        }

        match self.stack.as_slice() {
            [value] => Ok(*value),
            rest => Err(RuntimeError::UnbalancedStack { depth: rest.len() }),
        }
    }

    fn step(&mut self, position: usize, instruction: &Instruction) -> EvalResult<()> {
        let value = match instruction {
            Instruction::PushReal(r) => Value::Real(*r),
            Instruction::PushComplex(re, im) => Value::Complex((*re, *im).into()),
            Instruction::PushVariable(name) => self.load(name),
            Instruction::Negate => Self::eval_negate(self.pop(position)?),
            Instruction::Sqrt => Self::eval_sqrt(self.pop(position)?),
            Instruction::BinaryOp(op) => {
                let right = self.pop(position)?;
                let left = self.pop(position)?;
                Self::eval_binary(*op, left, right)?
            },
        };

        self.stack.push(value);
        Ok(())
    }

    /// Reads a variable, substituting `0` and recording a diagnostic when the
    /// name was never assigned.
    fn load(&mut self, name: &str) -> Value {
        self.environment.get(name).unwrap_or_else(|| {
                                      debug!("undefined variable '{name}', using 0");
                                      self.diagnostics
                                          .push(Diagnostic::UndefinedVariable { name: name.to_string() });
                                      Value::Real(0.0)
                                  })
    }

    fn pop(&mut self, position: usize) -> EvalResult<Value> {
        self.stack
            .pop()
            .ok_or(RuntimeError::StackUnderflow { position })
    }
}

/// Evaluates `code` against `environment`.
///
/// Shorthand for `Evaluator::new(environment, diagnostics).run(code)`.
///
/// # Example
/// ```
/// use cxcalc::{
///     interpreter::{
///         environment::Environment, evaluator::core::evaluate, value::core::Value,
///     },
///     program::{BinaryOperator, Instruction},
/// };
///
/// let env = Environment::new();
/// let mut diagnostics = Vec::new();
/// let code = [Instruction::PushReal(2.0),
///             Instruction::PushReal(3.0),
///             Instruction::BinaryOp(BinaryOperator::Mul)];
///
/// assert_eq!(evaluate(&code, &env, &mut diagnostics), Ok(Value::Real(6.0)));
/// assert!(diagnostics.is_empty());
/// ```
pub fn evaluate(code: &[Instruction],
                environment: &Environment,
                diagnostics: &mut Vec<Diagnostic>)
                -> EvalResult<Value> {
    Evaluator::new(environment, diagnostics).run(code)
}
