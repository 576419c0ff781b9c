//! Helpers for building token sequences and comparing float results in
//! tests.
//!
//! These functions keep infix and postfix fixtures short enough to fit on a
//! single `#[case]` line.

use crate::Token;

/// Construct an [`Token::Operand`].
#[must_use]
pub fn num(value: f64) -> Token {
    Token::Operand(value)
}

/// Construct an [`Token::Operator`].
#[must_use]
pub fn op(symbol: char) -> Token {
    Token::Operator(symbol)
}

/// Construct a [`Token::LeftParen`].
#[must_use]
pub fn lp() -> Token {
    Token::LeftParen
}

/// Construct a [`Token::RightParen`].
#[must_use]
pub fn rp() -> Token {
    Token::RightParen
}

/// Assert that `actual` is within a small relative tolerance of `expected`.
///
/// # Panics
/// Panics when the two values differ by more than the tolerance.
#[track_caller]
#[expect(clippy::float_arithmetic, reason = "tolerance comparison")]
pub fn assert_approx(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
