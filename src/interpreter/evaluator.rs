/// Core evaluation logic.
///
/// Contains the postfix stack machine that walks an instruction sequence
/// once, resolving variables against the environment.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `+ - * /` for real and complex operands, including the
/// real-to-complex promotion and the explicit division-by-zero check.
pub mod binary;

/// Unary operator evaluation.
///
/// Handles the single-operand instructions: negation and `sqrt`.
pub mod unary;
