/// An unrecognized character in the input.
///
/// The tokenizer skips the character and keeps going, so a lexical error
/// never aborts a line on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    /// The text that could not be tokenized.
    pub lexeme: String,
    /// Zero-based character column of the text within the line.
    pub column: usize,
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Unknown token '{}' at column {}.",
               self.lexeme,
               self.column + 1)
    }
}

impl std::error::Error for LexicalError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all syntax errors that can occur while parsing a line.
pub enum ParseError {
    /// Found a token the grammar does not allow at this position.
    UnexpectedToken {
        /// The token kind, e.g. `RPAREN`.
        kind:   &'static str,
        /// The literal text of the token.
        value:  String,
        /// Zero-based character column of the token within the line.
        column: usize,
    },
    /// The line ended before the statement was complete.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { kind, value, column } => {
                write!(f,
                       "Syntax error at token {kind}, value {value} (column {}).",
                       column + 1)
            },
            Self::UnexpectedEndOfInput => write!(f, "Syntax error at end of input."),
        }
    }
}

impl std::error::Error for ParseError {}
