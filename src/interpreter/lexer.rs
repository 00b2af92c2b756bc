use std::{fmt::Display, iter::FusedIterator, ops::Range};

use log::debug;
use logos::Logos;

use crate::{error::LexicalError, interpreter::value::complex::ComplexNumber};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// At every position the longest match wins; at equal length the keyword
/// tokens win over identifiers.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Complex literal tokens, such as `3+4j` or `-1.5-2j`.
    ///
    /// The leading sign belongs to the real part, the inner sign to the
    /// imaginary part. There is no whitespace inside the literal.
    #[regex(r"-?[0-9]+(\.[0-9]+)?[+-][0-9]+(\.[0-9]+)?j", parse_complex)]
    Complex(ComplexNumber),
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_float)]
    Real(f64),
    /// `sqrt`
    #[token("sqrt")]
    Sqrt,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable names such as `x` or `_tmp1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// Spaces and tabs. Logos skips these, so the variant is never yielded.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
    /// Marks the end of the line. Produced by [`Tokenizer`], never matched.
    EndOfInput,
}

impl Token {
    /// Returns the grammar name of the token's kind.
    ///
    /// # Example
    /// ```
    /// use cxcalc::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Plus.kind(), "PLUS");
    /// assert_eq!(Token::Identifier("x".into()).kind(), "ID");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Complex(_) => "COMPLEX",
            Self::Real(_) => "NUM",
            Self::Sqrt => "SQRT",
            Self::Print => "PRINT",
            Self::Identifier(_) => "ID",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "TIMES",
            Self::Slash => "DIVIDE",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Equals => "ASSIGN",
            Self::Ignored => "IGNORED",
            Self::EndOfInput => "$end",
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complex(c) => write!(f, "{c}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Sqrt => f.write_str("sqrt"),
            Self::Print => f.write_str("print"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Equals => f.write_str("="),
            Self::Ignored => f.write_str(" "),
            Self::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Character range of a token within its line.
///
/// Positions count `char`s, not bytes, so columns stay right on lines with
/// non-ASCII text.
pub type Span = Range<usize>;

/// A token paired with its span.
pub type Spanned = (Token, Span);

/// Lazily tokenizes one line of source text.
///
/// Yields tokens in order, then exactly one [`Token::EndOfInput`], then
/// nothing. Unrecognized characters are skipped and recorded; retrieve them
/// with [`Tokenizer::errors`] or [`Tokenizer::into_errors`] once the tokens
/// have been consumed.
///
/// # Example
/// ```
/// use cxcalc::interpreter::lexer::{Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("x = 3+4j ? 1");
/// let tokens: Vec<Token> = tokenizer.by_ref().map(|(t, _)| t).collect();
///
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[4], Token::EndOfInput);
/// assert_eq!(tokenizer.errors()[0].lexeme, "?");
/// ```
pub struct Tokenizer<'src> {
    lexer:    logos::Lexer<'src, Token>,
    errors:   Vec<LexicalError>,
    finished: bool,
    /// Last byte offset converted to a character offset, and its result.
    cursor:   (usize, usize),
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer over `line`.
    #[must_use]
    pub fn new(line: &'src str) -> Self {
        Self { lexer:    Token::lexer(line),
               errors:   Vec::new(),
               finished: false,
               cursor:   (0, 0), }
    }

    /// Lexical errors seen so far.
    #[must_use]
    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    /// Consumes the tokenizer, returning the lexical errors it recorded.
    #[must_use]
    pub fn into_errors(self) -> Vec<LexicalError> {
        self.errors
    }

    /// Converts a byte offset into a character offset.
    ///
    /// Offsets arrive in increasing order, so only the text since the previous
    /// call is counted.
    fn char_offset(&mut self, byte: usize) -> usize {
        let (last_byte, last_char) = self.cursor;
        let counted = self.lexer
                          .source()
                          .get(last_byte..byte)
                          .map_or(0, |text| text.chars().count());
        self.cursor = (byte, last_char + counted);
        self.cursor.1
    }

    fn char_span(&mut self, bytes: Range<usize>) -> Span {
        let start = self.char_offset(bytes.start);
        let end = self.char_offset(bytes.end);
        start..end
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Spanned;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.lexer.next() {
                Some(Ok(token)) => {
                    let span = self.char_span(self.lexer.span());
                    return Some((token, span));
                },
                Some(Err(())) => {
                    let span = self.char_span(self.lexer.span());
                    let error = LexicalError { lexeme: self.lexer.slice().to_string(),
                                               column: span.start, };
                    debug!("skipping unknown token {:?} at column {}",
                           error.lexeme,
                           error.column);
                    self.errors.push(error);
                },
                None => {
                    self.finished = true;
                    let end = self.char_offset(self.lexer.source().len());
                    return Some((Token::EndOfInput, end..end));
                },
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses a complex literal such as `-1.5-2j` from the current token slice.
///
/// The literal is split at its last sign character, which always separates
/// the real part from the imaginary part.
fn parse_complex(lex: &logos::Lexer<Token>) -> Option<ComplexNumber> {
    let body = lex.slice().strip_suffix('j')?;
    let split = body.rfind(|c| c == '+' || c == '-')?;
    let real = body[..split].parse().ok()?;
    let imaginary = body[split..].parse().ok()?;
    Some(ComplexNumber::new(real, imaginary))
}
