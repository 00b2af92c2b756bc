use log::debug;

use crate::{
    error::{Diagnostic, Error},
    interpreter::{
        environment::Environment, evaluator::core::evaluate, parser::parse, value::core::Value,
    },
    program::Statement,
};

/// What a successfully processed line did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line was blank; nothing was parsed.
    Empty,
    /// `name = expr` stored `value`.
    Assigned {
        /// The assigned variable.
        name:  String,
        /// The value now stored under `name`.
        value: Value,
    },
    /// `print(expr)` produced `value`.
    Printed(Value),
}

impl Outcome {
    /// Returns the value of a `print` statement.
    #[must_use]
    pub const fn printed(&self) -> Option<Value> {
        match self {
            Self::Printed(value) => Some(*value),
            _ => None,
        }
    }
}

/// Tokenizes, parses and evaluates one line.
///
/// Lexical errors and undefined-variable reads are appended to `diagnostics`
/// and do not stop the line. A syntax or arithmetic error aborts the line;
/// in that case no variable is written.
///
/// # Errors
/// - `Error::Parse` if the line is not a valid statement.
/// - `Error::Runtime` if evaluation fails (division by zero).
pub fn run_line(line: &str,
                environment: &mut Environment,
                diagnostics: &mut Vec<Diagnostic>)
                -> Result<Outcome, Error> {
    if line.trim().is_empty() {
        return Ok(Outcome::Empty);
    }

    let output = parse(line);
    diagnostics.extend(output.lexical_errors.into_iter().map(Diagnostic::from));

    match output.statement? {
        Statement::Assign { name, code } => {
            let value = evaluate(&code, environment, diagnostics)?;
            debug!("{name} <- {value}");
            environment.set(name.clone(), value);
            Ok(Outcome::Assigned { name, value })
        },
        Statement::Print { code } => Ok(Outcome::Printed(evaluate(&code, environment, diagnostics)?)),
    }
}

/// One interpreter run: the variables it has assigned and the diagnostics it
/// has not yet handed out.
///
/// Sessions are independent; two sessions never share variables.
#[derive(Debug, Clone, Default)]
pub struct Session {
    environment: Environment,
    diagnostics: Vec<Diagnostic>,
    interactive: bool,
}

impl Session {
    /// Creates a batch session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interactive session. Drivers use the flag to decide whether
    /// to echo assignments.
    #[must_use]
    pub fn interactive() -> Self {
        Self { interactive: true,
               ..Self::default() }
    }

    /// Processes one line.
    ///
    /// # Errors
    /// See [`run_line`].
    ///
    /// # Example
    /// ```
    /// use cxcalc::interpreter::{
    ///     session::{Outcome, Session},
    ///     value::core::Value,
    /// };
    ///
    /// let mut session = Session::new();
    /// session.execute("x = 2 + 3 * 4").unwrap();
    /// let out = session.execute("print(x)").unwrap();
    ///
    /// assert_eq!(out, Outcome::Printed(Value::Real(14.0)));
    /// ```
    pub fn execute(&mut self, line: &str) -> Result<Outcome, Error> {
        run_line(line, &mut self.environment, &mut self.diagnostics)
    }

    /// Removes and returns the diagnostics collected so far.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// The session's variables.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns `true` for sessions created with [`Session::interactive`].
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }
}
