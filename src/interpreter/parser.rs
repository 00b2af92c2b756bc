/// Operator precedence table.
///
/// Holds the binding strength and associativity of every operator, including
/// the unary minus override, and the lookup helpers used while climbing.
pub mod precedence;

/// Expression compilation.
///
/// Implements precedence climbing over the token stream and emits postfix
/// instructions directly, without building a tree.
pub mod expression;

/// Statement parsing.
///
/// Recognizes the two statement forms, `name = expr` and `print(expr)`, and
/// rejects anything else, including trailing tokens.
pub mod statement;

/// Shared token helpers.
///
/// Builds syntax errors and checks expected tokens.
pub mod utils;

/// Read-only grammar description.
///
/// Lists the grammar productions and renders them together with the
/// precedence table for inspection tools.
pub mod table;

use log::trace;

use crate::{
    error::{LexicalError, ParseError},
    interpreter::{lexer::Tokenizer, parser::statement::parse_statement},
    program::Statement,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Everything produced by parsing one line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    /// The parsed statement or the syntax error that stopped parsing.
    pub statement:      ParseResult<Statement>,
    /// Unrecognized characters that were skipped along the way.
    pub lexical_errors: Vec<LexicalError>,
}

/// Parses one line into a [`Statement`].
///
/// Parsing is a pure transformation: no variables are read or written.
/// Lexical errors are returned alongside the result, whether or not the parse
/// succeeded.
///
/// # Example
/// ```
/// use cxcalc::{
///     interpreter::parser::parse,
///     program::{BinaryOperator, Instruction, Statement},
/// };
///
/// let output = parse("x = 1 + 2");
/// assert_eq!(output.statement,
///            Ok(Statement::Assign { name: "x".into(),
///                                   code: vec![Instruction::PushReal(1.0),
///                                              Instruction::PushReal(2.0),
///                                              Instruction::BinaryOp(BinaryOperator::Add)], }));
/// assert!(output.lexical_errors.is_empty());
/// ```
#[must_use]
pub fn parse(line: &str) -> ParseOutput {
    let mut tokenizer = Tokenizer::new(line);
    let statement = parse_statement(&mut tokenizer.by_ref().peekable());
    trace!("parsed {line:?} into {statement:?}");

    // Drain the rest of the line so every unknown character is reported.
    tokenizer.by_ref().for_each(drop);

    ParseOutput { statement,
                  lexical_errors: tokenizer.into_errors() }
}
