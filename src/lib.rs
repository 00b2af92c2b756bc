//! # cxcalc
//!
//! cxcalc is a small line-oriented calculator language over real and complex
//! numbers. Every line is either an assignment, `name = expr`, or a print
//! statement, `print(expr)`. Expressions support `+ - * /`, unary minus,
//! parentheses and `sqrt`, and complex literals are written like `3+4j`.
//!
//! Each line goes through the same pipeline:
//!
//! ```text
//! line → Tokenizer → precedence-climbing parser → postfix code → stack evaluator
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead};

use crate::{
    error::{Diagnostic, Error},
    interpreter::{
        environment::Environment,
        session::{Outcome, Session, run_line},
        value::core::Value,
    },
};

/// Provides the error types for lexing, parsing and evaluation.
///
/// This module defines everything that can go wrong while processing a line:
/// hard errors that abort the line and diagnostics that are recovered from
/// but still reported.
///
/// # Responsibilities
/// - Defines `ParseError`, `RuntimeError` and the unified `Error`.
/// - Defines `Diagnostic` for lexical errors and undefined variables.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the processing of a line.
///
/// This module ties together lexing, parsing, evaluation, the value types and
/// the variable environment, and exposes sessions that run lines one after
/// another.
pub mod interpreter;
/// Defines the parser's output.
///
/// Declares `Instruction`, the postfix code an expression compiles to, and
/// `Statement`, the parsed form of a line.
pub mod program;

/// Parses and evaluates a single line against `environment`.
///
/// Returns `Some(value)` for a `print` statement and `None` for a successful
/// assignment or a blank line. Recoverable conditions (unknown characters,
/// undefined variables) are appended to `diagnostics`.
///
/// # Errors
/// Returns an error if the line has a syntax error or evaluation fails. A
/// failed assignment leaves `environment` unchanged.
///
/// # Examples
/// ```
/// use cxcalc::{interpreter::environment::Environment, parse_and_evaluate};
///
/// let mut env = Environment::new();
/// let mut diagnostics = Vec::new();
///
/// let res = parse_and_evaluate("x = (2 + 3) * 4", &mut env, &mut diagnostics);
/// assert_eq!(res, Ok(None));
///
/// let res = parse_and_evaluate("print(x / 2)", &mut env, &mut diagnostics).unwrap();
/// assert_eq!(res.map(|v| v.to_string()), Some("10".to_string()));
///
/// // Division by zero is an error, and `y` stays unset.
/// assert!(parse_and_evaluate("y = 1 / 0", &mut env, &mut diagnostics).is_err());
/// assert_eq!(env.get("y"), None);
/// ```
pub fn parse_and_evaluate(line: &str,
                          environment: &mut Environment,
                          diagnostics: &mut Vec<Diagnostic>)
                          -> Result<Option<Value>, Error> {
    run_line(line, environment, diagnostics).map(|outcome| outcome.printed())
}

/// The result of one line of a script.
#[derive(Debug, Clone, PartialEq)]
pub struct LineReport {
    /// One-based line number within the script.
    pub line:        usize,
    /// What the line did, or why it failed.
    pub result:      Result<Outcome, Error>,
    /// Recoverable conditions raised by this line.
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs every line of `source` in `session`.
///
/// Lines are independent: an error on one line is recorded in its report and
/// the next line runs as usual. Blank lines produce `Outcome::Empty`.
///
/// # Examples
/// ```
/// use cxcalc::{interpreter::session::Session, run_script};
///
/// let mut session = Session::new();
/// let reports = run_script("a = 1\nb = a / 0\nc = a + 1", &mut session);
///
/// assert!(reports[1].result.is_err());
/// assert!(reports[2].result.is_ok());
/// assert_eq!(session.environment().len(), 2);
/// ```
pub fn run_script(source: &str, session: &mut Session) -> Vec<LineReport> {
    source.lines()
          .enumerate()
          .map(|(i, text)| {
              let result = session.execute(text);
              LineReport { line: i + 1,
                           result,
                           diagnostics: session.take_diagnostics() }
          })
          .collect()
}

/// Reads one line from `reader` for interactive use.
///
/// Returns `None` at end of input. The line terminator is stripped, and bytes
/// that are not valid UTF-8 become `U+FFFD`, which the tokenizer then reports
/// as an unknown character. A bad line therefore never ends a session.
///
/// # Errors
/// Returns the underlying I/O error if reading fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use cxcalc::read_source_line;
///
/// let mut input = Cursor::new(b"x = 1\r\n\xff\n".to_vec());
///
/// assert_eq!(read_source_line(&mut input).unwrap(), Some("x = 1".to_string()));
/// assert_eq!(read_source_line(&mut input).unwrap(), Some("\u{FFFD}".to_string()));
/// assert_eq!(read_source_line(&mut input).unwrap(), None);
/// ```
pub fn read_source_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
