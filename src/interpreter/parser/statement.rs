use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            ParseResult,
            expression::parse_expression,
            utils::{expect_token, unexpected},
        },
    },
    program::Statement,
};

/// Parses a single statement and checks that nothing follows it.
///
/// A statement is one of:
/// - an assignment, `name = expr`.
/// - a print statement, `print(expr)`.
///
/// A bare expression is not a statement and is rejected at its first token.
///
/// # Parameters
/// - `tokens`: Token iterator ending in `EndOfInput`.
///
/// # Returns
/// The parsed [`Statement`].
pub fn parse_statement<I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = Spanned>
{
    let statement = match tokens.peek() {
        Some((Token::Identifier(_), _)) => parse_assignment(tokens)?,
        Some((Token::Print, _)) => parse_print(tokens)?,
        Some((token, span)) => return Err(unexpected(token, span)),
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    expect_token(tokens, &Token::EndOfInput)?;
    Ok(statement)
}

/// Parses `ID "=" expr`.
fn parse_assignment<I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = Spanned>
{
    let name = match expect_token(tokens, &Token::Identifier(String::new()))? {
        (Token::Identifier(name), _) => name,
        (token, span) => return Err(unexpected(&token, &span)),
    };
    expect_token(tokens, &Token::Equals)?;
    let code = parse_expression(tokens)?;

    Ok(Statement::Assign { name, code })
}

/// Parses `"print" "(" expr ")"`.
fn parse_print<I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = Spanned>
{
    expect_token(tokens, &Token::Print)?;
    expect_token(tokens, &Token::LParen)?;
    let code = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen)?;

    Ok(Statement::Print { code })
}
