//! Stack machine for postfix token sequences.

use log::debug;

use crate::{EvalError, Token};

/// Reduce a postfix token sequence to a single value.
///
/// Operands are pushed onto a call-local stack; each operator pops its right
/// operand first and its left operand second, then pushes the result.
///
/// # Examples
///
/// ```rust
/// use infix_calc::{Token, evaluate};
///
/// let postfix = vec![
///     Token::Operand(3.0),
///     Token::Operand(5.0),
///     Token::Operator('+'),
///     Token::Operand(2.0),
///     Token::Operator('*'),
/// ];
/// assert_eq!(evaluate(postfix), Ok(16.0));
/// ```
///
/// # Errors
/// - [`EvalError::InsufficientOperands`] when an operator finds fewer than two
///   values.
/// - [`EvalError::InvalidExpression`] when anything other than exactly one
///   value remains, including for empty input.
/// - [`EvalError::UnknownOperator`] for symbols outside `+ - * / ^`.
/// - [`EvalError::DivisionByZero`] when `/` has a zero right operand.
/// - [`EvalError::MalformedExpression`] when a parenthesis appears; postfix
///   input never carries grouping markers.
pub fn evaluate<I>(tokens: I) -> Result<f64, EvalError>
where
    I: IntoIterator<Item = Token>,
{
    let mut operands: Vec<f64> = Vec::new();

    for token in tokens {
        match token {
            Token::Operand(value) => operands.push(value),
            Token::Operator(operator) => {
                let (Some(rhs), Some(lhs)) = (operands.pop(), operands.pop()) else {
                    debug!("operator {operator:?} reached with too few operands");
                    return Err(EvalError::InsufficientOperands { operator });
                };
                operands.push(apply(lhs, rhs, operator)?);
            }
            Token::LeftParen | Token::RightParen => {
                return Err(EvalError::MalformedExpression {
                    reason: "parenthesis in postfix input",
                });
            }
        }
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        rest => {
            debug!("postfix evaluation left {} values", rest.len());
            Err(EvalError::InvalidExpression {
                remaining: rest.len(),
            })
        }
    }
}

/// Apply a binary operator to `lhs` and `rhs`, in that order.
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] for `/` with a zero `rhs` and
/// [`EvalError::UnknownOperator`] for unrecognized symbols.
#[expect(clippy::float_arithmetic, reason = "arithmetic is the evaluator's job")]
pub fn apply(lhs: f64, rhs: f64, operator: char) -> Result<f64, EvalError> {
    match operator {
        '+' => Ok(lhs + rhs),
        '-' => Ok(lhs - rhs),
        '*' => Ok(lhs * rhs),
        '/' if rhs == 0.0 => Err(EvalError::DivisionByZero),
        '/' => Ok(lhs / rhs),
        '^' => Ok(lhs.powf(rhs)),
        symbol => Err(EvalError::UnknownOperator { symbol }),
    }
}
