/// Lexing and parsing errors.
///
/// Defines the errors detected before evaluation: unrecognized characters
/// (`LexicalError`) and grammar violations (`ParseError`).
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while executing compiled postfix code, such as
/// division by zero or a malformed instruction sequence.
pub mod runtime_error;
/// Recoverable conditions.
///
/// Diagnostics are reported to the caller but do not stop the statement that
/// produced them.
pub mod diagnostic;

pub use diagnostic::Diagnostic;
pub use parse_error::{LexicalError, ParseError};
pub use runtime_error::RuntimeError;

/// Any error that aborts a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The line could not be parsed.
    Parse(ParseError),
    /// The compiled statement failed while evaluating.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
