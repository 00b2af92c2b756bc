use crate::{interpreter::lexer::Token, program::BinaryOperator};

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `- - a` groups as `-(-a)`.
    Right,
}

impl Associativity {
    /// Returns the lowercase name used when rendering the table.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// One row of the precedence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecedenceLevel {
    /// Binding strength; higher binds tighter.
    pub precedence:    u8,
    /// Grouping of operators at this level.
    pub associativity: Associativity,
    /// The operator symbols that share this level.
    pub operators:     &'static [&'static str],
}

/// Precedence of `+` and `-`.
pub const ADDITIVE: PrecedenceLevel = PrecedenceLevel { precedence:    1,
                                                        associativity: Associativity::Left,
                                                        operators:     &["+", "-"], };

/// Precedence of `*` and `/`.
pub const MULTIPLICATIVE: PrecedenceLevel =
    PrecedenceLevel { precedence:    2,
                      associativity: Associativity::Left,
                      operators:     &["*", "/"], };

/// Precedence of prefix `-`.
///
/// Stronger than every binary operator, so `-2*3` is `(-2)*3`.
pub const UNARY_MINUS: PrecedenceLevel = PrecedenceLevel { precedence:    3,
                                                           associativity: Associativity::Right,
                                                           operators:     &["-u"], };

/// The full table, lowest precedence first.
pub const PRECEDENCE_TABLE: [PrecedenceLevel; 3] = [ADDITIVE, MULTIPLICATIVE, UNARY_MINUS];

/// Returns the table row of a binary operator.
///
/// # Example
/// ```
/// use cxcalc::{
///     interpreter::parser::precedence::{MULTIPLICATIVE, binding_power},
///     program::BinaryOperator,
/// };
///
/// assert_eq!(binding_power(BinaryOperator::Div), MULTIPLICATIVE);
/// ```
#[must_use]
pub const fn binding_power(op: BinaryOperator) -> PrecedenceLevel {
    match op {
        BinaryOperator::Add | BinaryOperator::Sub => ADDITIVE,
        BinaryOperator::Mul | BinaryOperator::Div => MULTIPLICATIVE,
    }
}

/// Returns the minimum precedence for the right operand of an operator at
/// `level`.
///
/// Left-associative operators require the right operand to bind strictly
/// tighter, so an equal-precedence operator ends the operand and is folded
/// into the left side instead.
#[must_use]
pub const fn next_min_precedence(level: PrecedenceLevel) -> u8 {
    match level.associativity {
        Associativity::Left => level.precedence + 1,
        Associativity::Right => level.precedence,
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that cannot appear between two operands.
///
/// # Example
/// ```
/// use cxcalc::{
///     interpreter::{lexer::Token, parser::precedence::token_to_binary_operator},
///     program::BinaryOperator,
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::RParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
