use std::{iter::Peekable, mem::discriminant};

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Span, Spanned, Token},
        parser::ParseResult,
    },
};

/// Builds the syntax error for a token the grammar did not expect.
///
/// `EndOfInput` is reported as [`ParseError::UnexpectedEndOfInput`], every
/// other token as [`ParseError::UnexpectedToken`] with its kind, literal
/// text and column.
#[must_use]
pub fn unexpected(token: &Token, span: &Span) -> ParseError {
    match token {
        Token::EndOfInput => ParseError::UnexpectedEndOfInput,
        other => ParseError::UnexpectedToken { kind:   other.kind(),
                                               value:  other.to_string(),
                                               column: span.start, },
    }
}

/// Consumes the next token and checks that it has the same kind as
/// `expected`.
///
/// Payloads are not compared, so `Token::Identifier(String::new())` accepts
/// any identifier.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the stream is exhausted or at its end marker.
/// - `UnexpectedToken` for any other kind of token.
pub fn expect_token<I>(tokens: &mut Peekable<I>, expected: &Token) -> ParseResult<Spanned>
    where I: Iterator<Item = Spanned>
{
    match tokens.next() {
        Some((token, span)) if discriminant(&token) == discriminant(expected) => Ok((token, span)),
        Some((token, span)) => Err(unexpected(&token, &span)),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
