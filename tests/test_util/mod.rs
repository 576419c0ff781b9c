//! Shared test utilities for integration tests.
//!
//! These helpers build token sequences and compare float results. They mirror
//! a subset of the `infix_calc::test_util` module without requiring the
//! `test-support` feature, enabling integration tests to compile against the
//! published library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use infix_calc::Token;

/// Construct a [`Token::Operand`].
#[must_use]
pub fn num(value: f64) -> Token {
    Token::Operand(value)
}

/// Construct a [`Token::Operator`].
#[must_use]
pub fn op(symbol: char) -> Token {
    Token::Operator(symbol)
}

#[must_use]
pub fn lp() -> Token {
    Token::LeftParen
}

#[must_use]
pub fn rp() -> Token {
    Token::RightParen
}

/// Assert that `actual` is within a small relative tolerance of `expected`.
#[track_caller]
#[expect(clippy::float_arithmetic, reason = "tolerance comparison")]
pub fn assert_approx(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

/// Evaluate `src` end to end, panicking with the source on failure.
#[track_caller]
pub fn eval_str_ok(src: &str) -> f64 {
    infix_calc::evaluate_str(src).unwrap_or_else(|e| panic!("source {src:?} failed: {e}"))
}
