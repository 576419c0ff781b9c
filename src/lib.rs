//! Library crate for infix-calc.
//!
//! Converts arithmetic expressions from infix to postfix order with the
//! shunting-yard algorithm and evaluates the postfix form on a stack. A small
//! lexer turns raw text into the typed tokens the core consumes.

#![forbid(unsafe_code)]

pub mod error;
pub mod parser;
pub mod token;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use error::{Error, EvalError, LexError};
pub use parser::{apply, evaluate, evaluate_infix, to_postfix};
pub use token::{Token, format_tokens};
pub use tokenizer::{Span, tokenize};

/// Tokenise, convert and evaluate `src` in one step.
///
/// # Examples
///
/// ```rust
/// assert_eq!(infix_calc::evaluate_str("(3 + 5) * 2"), Ok(16.0));
/// ```
///
/// # Errors
/// Returns [`Error::Lex`] when `src` contains input outside the expression
/// grammar and [`Error::Eval`] for every conversion or evaluation failure.
pub fn evaluate_str(src: &str) -> Result<f64, Error> {
    let tokens = tokenize(src)?;
    Ok(evaluate_infix(tokens)?)
}
