//! Lexical analysis for arithmetic expressions.
//!
//! Converts raw text into the typed [`Token`] sequence consumed by the
//! converter. It uses the `logos` crate to recognise numbers, the five binary
//! operators and parentheses; whitespace is skipped.

use logos::Logos;

use crate::{LexError, Token};

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum Lexeme {
    #[regex(r"[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")]
    Number,
    #[regex(r"[-+*/^]", |lex| lex.slice().chars().next())]
    Operator(char),
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Tokenise `src` into operands, operators and parentheses.
///
/// `-` is always lexed as a binary operator; there are no signed literals.
///
/// # Examples
///
/// ```rust
/// use infix_calc::{Token, tokenize};
///
/// let tokens = tokenize("(1 + 2.5)").expect("valid input");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::LeftParen,
///         Token::Operand(1.0),
///         Token::Operator('+'),
///         Token::Operand(2.5),
///         Token::RightParen,
///     ]
/// );
/// ```
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] for input outside the expression
/// grammar and [`LexError::InvalidNumber`] for a literal `f64` cannot parse.
pub fn tokenize(src: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexeme::lexer(src);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let Ok(lexeme) = result else {
            return Err(LexError::UnexpectedCharacter {
                text: text.to_string(),
                span,
            });
        };
        let token = match lexeme {
            Lexeme::Number => Token::Operand(parse_number(text, span)?),
            Lexeme::Operator(symbol) => Token::Operator(symbol),
            Lexeme::LParen => Token::LeftParen,
            Lexeme::RParen => Token::RightParen,
        };
        out.push(token);
    }
    Ok(out)
}

/// Parse a numeric literal, rejecting values that overflow to infinity.
fn parse_number(text: &str, span: Span) -> Result<f64, LexError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LexError::InvalidNumber {
            text: text.to_string(),
            span,
        }),
    }
}
