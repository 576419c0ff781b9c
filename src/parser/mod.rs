//! Infix-to-postfix conversion and postfix evaluation.
//!
//! The two stages are independent: [`to_postfix`] reorders an infix token
//! sequence with the shunting-yard algorithm and [`evaluate`] reduces the
//! resulting postfix sequence on an operand stack. [`evaluate_infix`] runs
//! one after the other.

pub mod converter;
pub mod evaluator;
pub mod precedence;

pub use converter::to_postfix;
pub use evaluator::{apply, evaluate};

use crate::{EvalError, Token};

/// Convert an infix token sequence and evaluate it.
///
/// # Examples
///
/// ```rust
/// use infix_calc::{Token, evaluate_infix};
///
/// let tokens = vec![
///     Token::Operand(2.0),
///     Token::Operator('+'),
///     Token::Operand(3.0),
///     Token::Operator('*'),
///     Token::Operand(4.0),
/// ];
/// assert_eq!(evaluate_infix(tokens), Ok(14.0));
/// ```
///
/// # Errors
/// Propagates every [`EvalError`] raised by [`to_postfix`] and [`evaluate`].
pub fn evaluate_infix<I>(tokens: I) -> Result<f64, EvalError>
where
    I: IntoIterator<Item = Token>,
{
    evaluate(to_postfix(tokens)?)
}
