use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            ParseResult,
            precedence::{
                ADDITIVE, UNARY_MINUS, binding_power, next_min_precedence,
                token_to_binary_operator,
            },
            utils::{expect_token, unexpected},
        },
    },
    program::Instruction,
};

/// Parses a full expression and returns its postfix code.
///
/// This is the entry point for expression parsing. It starts climbing at the
/// lowest binary precedence, so every operator in the table is accepted.
///
/// Grammar:
/// ```text
///     expr := expr ("+" | "-" | "*" | "/") expr
///           | "-" expr
///           | "(" expr ")"
///           | NUM | COMPLEX | ID
///           | "sqrt" "(" expr ")"
/// ```
/// Ambiguities in this grammar are resolved only by the precedence table.
///
/// # Example
/// ```
/// use cxcalc::{
///     interpreter::{lexer::Tokenizer, parser::expression::parse_expression},
///     program::to_postfix_string,
/// };
///
/// let code = parse_expression(&mut Tokenizer::new("2 + 3 * 4").peekable()).unwrap();
/// assert_eq!(to_postfix_string(&code), "2 3 4 * +");
/// ```
pub fn parse_expression<I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Instruction>>
    where I: Iterator<Item = Spanned>
{
    let mut code = Vec::new();
    parse_climbing(tokens, ADDITIVE.precedence, &mut code)?;
    Ok(code)
}

/// Parses an operand followed by every binary operator that binds at least
/// as tightly as `min_precedence`, appending postfix code to `code`.
///
/// The right operand of each operator is parsed recursively with the minimum
/// precedence returned by [`next_min_precedence`], which is what makes `+ - *
/// /` left-associative: an operator of the same level stops the right operand
/// and is picked up by this loop instead.
pub fn parse_climbing<I>(tokens: &mut Peekable<I>,
                         min_precedence: u8,
                         code: &mut Vec<Instruction>)
                         -> ParseResult<()>
    where I: Iterator<Item = Spanned>
{
    parse_unary(tokens, code)?;

    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && binding_power(op).precedence >= min_precedence
        {
            tokens.next();
            parse_climbing(tokens, next_min_precedence(binding_power(op)), code)?;
            code.push(Instruction::BinaryOp(op));
            continue;
        }
        break;
    }

    Ok(())
}

/// Parses a unary expression.
///
/// A leading `-` parses its operand at [`UNARY_MINUS`] precedence. Since no
/// binary operator reaches that level, the operand is a single primary (or
/// another negation), so `-2*3` negates only the `2` and `- -2` nests.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
fn parse_unary<I>(tokens: &mut Peekable<I>, code: &mut Vec<Instruction>) -> ParseResult<()>
    where I: Iterator<Item = Spanned>
{
    if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        parse_climbing(tokens, UNARY_MINUS.precedence, code)?;
        code.push(Instruction::Negate);
        Ok(())
    } else {
        parse_primary(tokens, code)
    }
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUM
///              | COMPLEX
///              | ID
///              | "(" expr ")"
///              | "sqrt" "(" expr ")"
/// ```
fn parse_primary<I>(tokens: &mut Peekable<I>, code: &mut Vec<Instruction>) -> ParseResult<()>
    where I: Iterator<Item = Spanned>
{
    let (token, span) = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token {
        Token::Real(r) => code.push(Instruction::PushReal(r)),
        Token::Complex(c) => code.push(Instruction::PushComplex(c.real, c.imaginary)),
        Token::Identifier(name) => code.push(Instruction::PushVariable(name)),
        Token::LParen => {
            parse_climbing(tokens, ADDITIVE.precedence, code)?;
            expect_token(tokens, &Token::RParen)?;
        },
        Token::Sqrt => {
            expect_token(tokens, &Token::LParen)?;
            parse_climbing(tokens, ADDITIVE.precedence, code)?;
            expect_token(tokens, &Token::RParen)?;
            code.push(Instruction::Sqrt);
        },
        other => return Err(unexpected(&other, &span)),
    }

    Ok(())
}
