//! Typed tokens shared by the converter and the evaluator.
//!
//! Tokens arrive already classified: numbers, single-character operators and
//! the two grouping markers. The same type describes both infix input and
//! postfix output so the converter's result can be handed to the evaluator
//! unchanged.

use std::fmt;

/// A single element of an infix or postfix expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal.
    Operand(f64),
    /// Binary operator symbol, one of `+ - * / ^`.
    Operator(char),
    /// Opening parenthesis.
    LeftParen,
    /// Closing parenthesis.
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(value) => write!(f, "{value}"),
            Self::Operator(symbol) => write!(f, "{symbol}"),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

/// Render tokens separated by single spaces.
///
/// Mostly useful for diagnostics, e.g. showing the postfix form produced by
/// [`to_postfix`](crate::to_postfix).
///
/// # Examples
///
/// ```rust
/// use infix_calc::{Token, format_tokens};
///
/// let postfix = [
///     Token::Operand(3.0),
///     Token::Operand(5.0),
///     Token::Operator('+'),
/// ];
/// assert_eq!(format_tokens(&postfix), "3 5 +");
/// ```
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{Token, format_tokens};
    use rstest::rstest;

    #[rstest]
    #[case(Token::Operand(2.0), "2")]
    #[case(Token::Operand(2.5), "2.5")]
    #[case(Token::Operator('^'), "^")]
    #[case(Token::LeftParen, "(")]
    #[case(Token::RightParen, ")")]
    fn token_display(#[case] token: Token, #[case] expected: &str) {
        assert_eq!(token.to_string(), expected);
    }

    #[test]
    fn empty_sequence_formats_as_empty_string() {
        assert_eq!(format_tokens(&[]), "");
    }
}
