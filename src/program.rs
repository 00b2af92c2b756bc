use std::fmt::Display;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One step of a compiled expression.
///
/// An expression compiles to a sequence of instructions in postfix order:
/// operands are pushed before the operator that consumes them. Every
/// well-formed sequence leaves exactly one value on the stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Push a real literal.
    PushReal(f64),
    /// Push a complex literal `(real, imaginary)`.
    PushComplex(f64, f64),
    /// Push the current value of a variable.
    PushVariable(String),
    /// Replace the top of the stack with its negation.
    Negate,
    /// Pop the right then the left operand and push `left op right`.
    BinaryOp(BinaryOperator),
    /// Replace the top of the stack with its principal square root.
    Sqrt,
}

impl Instruction {
    /// The net change in stack depth caused by executing this instruction.
    ///
    /// # Example
    /// ```
    /// use cxcalc::program::{BinaryOperator, Instruction};
    ///
    /// assert_eq!(Instruction::PushReal(1.0).stack_effect(), 1);
    /// assert_eq!(Instruction::Negate.stack_effect(), 0);
    /// assert_eq!(Instruction::BinaryOp(BinaryOperator::Add).stack_effect(), -1);
    /// ```
    #[must_use]
    pub const fn stack_effect(&self) -> isize {
        match self {
            Self::PushReal(_) | Self::PushComplex(..) | Self::PushVariable(_) => 1,
            Self::Negate | Self::Sqrt => 0,
            Self::BinaryOp(_) => -1,
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PushReal(r) => write!(f, "{r}"),
            Self::PushComplex(re, im) if im.is_sign_negative() => write!(f, "{re}-{}j", -im),
            Self::PushComplex(re, im) => write!(f, "{re}+{im}j"),
            Self::PushVariable(name) => f.write_str(name),
            Self::Negate => f.write_str("neg"),
            Self::BinaryOp(op) => write!(f, "{op}"),
            Self::Sqrt => f.write_str("sqrt"),
        }
    }
}

/// Formats an instruction sequence as space separated postfix text, e.g.
/// `2 3 4 * +`.
#[must_use]
pub fn to_postfix_string(code: &[Instruction]) -> String {
    code.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A parsed line.
///
/// Statements are produced fresh for every input line and carry the compiled
/// postfix code of their expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name = expr`
    Assign {
        /// The assignment target.
        name: String,
        /// The compiled right-hand side.
        code: Vec<Instruction>,
    },
    /// `print(expr)`
    Print {
        /// The compiled argument.
        code: Vec<Instruction>,
    },
}

impl Statement {
    /// Returns the compiled expression of the statement.
    #[must_use]
    pub fn code(&self) -> &[Instruction] {
        match self {
            Self::Assign { code, .. } | Self::Print { code } => code,
        }
    }
}
