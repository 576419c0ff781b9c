//! Shunting-yard conversion from infix to postfix order.
//!
//! Operands flow straight to the output while operators wait on a stack until
//! an operator that binds no tighter arrives, a closing parenthesis flushes
//! them, or the input ends.

use log::{debug, trace};

use super::precedence::{operator_info, should_pop};
use crate::{EvalError, Token, format_tokens};

/// Entry on the pending-operator stack.
///
/// Open parentheses are kept apart from operators so they never take part in
/// precedence comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(char),
    Open,
}

/// Convert an infix token sequence into postfix order.
///
/// Tokens are consumed front to back. Grouping markers are dropped from the
/// output; the resulting sequence only holds operands and operators.
///
/// # Examples
///
/// ```rust
/// use infix_calc::{Token, format_tokens, to_postfix};
///
/// let infix = vec![
///     Token::LeftParen,
///     Token::Operand(3.0),
///     Token::Operator('+'),
///     Token::Operand(5.0),
///     Token::RightParen,
///     Token::Operator('*'),
///     Token::Operand(2.0),
/// ];
/// let postfix = to_postfix(infix).expect("balanced input");
/// assert_eq!(format_tokens(&postfix), "3 5 + 2 *");
/// ```
///
/// # Errors
/// Returns [`EvalError::MalformedExpression`] when parentheses are unbalanced
/// and [`EvalError::UnknownOperator`] when an operator symbol is not one of
/// `+ - * / ^`.
pub fn to_postfix<I>(tokens: I) -> Result<Vec<Token>, EvalError>
where
    I: IntoIterator<Item = Token>,
{
    let tokens = tokens.into_iter();
    let mut output = Vec::with_capacity(tokens.size_hint().0);
    let mut pending: Vec<Pending> = Vec::new();

    for token in tokens {
        match token {
            Token::Operand(_) => output.push(token),
            Token::LeftParen => pending.push(Pending::Open),
            Token::RightParen => close_group(&mut pending, &mut output)?,
            Token::Operator(symbol) => {
                if operator_info(symbol).is_none() {
                    debug!("rejecting unknown operator {symbol:?} during conversion");
                    return Err(EvalError::UnknownOperator { symbol });
                }
                while let Some(&Pending::Operator(top)) = pending.last() {
                    if !should_pop(top, symbol) {
                        break;
                    }
                    pending.pop();
                    output.push(Token::Operator(top));
                }
                pending.push(Pending::Operator(symbol));
            }
        }
    }

    while let Some(entry) = pending.pop() {
        match entry {
            Pending::Operator(symbol) => output.push(Token::Operator(symbol)),
            Pending::Open => {
                debug!("unclosed parenthesis with {} entries left", pending.len());
                return Err(EvalError::MalformedExpression {
                    reason: "unclosed opening parenthesis",
                });
            }
        }
    }

    trace!("postfix: {}", format_tokens(&output));
    Ok(output)
}

/// Flush operators down to the nearest open parenthesis and discard it.
fn close_group(pending: &mut Vec<Pending>, output: &mut Vec<Token>) -> Result<(), EvalError> {
    loop {
        match pending.pop() {
            Some(Pending::Operator(symbol)) => output.push(Token::Operator(symbol)),
            Some(Pending::Open) => return Ok(()),
            None => {
                debug!("closing parenthesis without a matching opener");
                return Err(EvalError::MalformedExpression {
                    reason: "unmatched closing parenthesis",
                });
            }
        }
    }
}
