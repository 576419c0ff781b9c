//! Error types reported by the lexer, converter and evaluator.
//!
//! Each failure mode has its own variant so callers can present a precise
//! diagnostic instead of a generic "bad expression" message.

use thiserror::Error;

use crate::Span;

/// Failures raised while converting or evaluating a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Parentheses are unbalanced, or grouping markers reached the evaluator.
    #[error("malformed expression: {reason}")]
    MalformedExpression { reason: &'static str },
    /// An operator found fewer than two values on the operand stack.
    #[error("not enough operands for operator '{operator}'")]
    InsufficientOperands { operator: char },
    /// Evaluation finished with other than exactly one value on the stack.
    #[error("invalid expression: {remaining} values left after evaluation")]
    InvalidExpression { remaining: usize },
    /// The operator symbol is not one of `+ - * / ^`.
    #[error("unknown operator '{symbol}'")]
    UnknownOperator { symbol: char },
    /// The right operand of `/` was zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Failures raised while splitting raw text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Input that is neither a number, an operator nor a parenthesis.
    #[error("unexpected input {text:?} at {span:?}")]
    UnexpectedCharacter { text: String, span: Span },
    /// A numeric literal that could not be represented as `f64`.
    #[error("invalid number {text:?} at {span:?}")]
    InvalidNumber { text: String, span: Span },
}

/// Any failure of the text-to-value pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
