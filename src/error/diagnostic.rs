use crate::error::LexicalError;

/// A condition that was recovered from but must still reach the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An unrecognized character was skipped.
    Lexical(LexicalError),
    /// A variable was read before ever being assigned; `0` was used instead.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
}

impl From<LexicalError> for Diagnostic {
    fn from(e: LexicalError) -> Self {
        Self::Lexical(e)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),
            Self::UndefinedVariable { name } => {
                write!(f, "Variable '{name}' not defined, using 0.")
            },
        }
    }
}
