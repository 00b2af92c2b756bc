#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating postfix code.
pub enum RuntimeError {
    /// Attempted division by zero (real or complex divisor).
    DivisionByZero,
    /// An instruction needed more operands than the stack held.
    ///
    /// Never produced for code emitted by the parser; seeing it means the
    /// instruction sequence was built by hand and is malformed.
    StackUnderflow {
        /// Index of the instruction that underflowed.
        position: usize,
    },
    /// The code finished with a stack depth other than one.
    ///
    /// Like `StackUnderflow`, only hand-built sequences can trigger this.
    UnbalancedStack {
        /// The number of values left on the stack.
        depth: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Arithmetic error: division by zero."),
            Self::StackUnderflow { position } => {
                write!(f, "Malformed code: stack underflow at instruction {position}.")
            },
            Self::UnbalancedStack { depth } => write!(f,
                                                      "Malformed code: expected one result, found {depth} values on the stack."),
        }
    }
}

impl std::error::Error for RuntimeError {}
