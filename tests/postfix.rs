//! Integration tests for the converter and evaluator as separate stages.

use infix_calc::{EvalError, Token, evaluate, format_tokens, to_postfix, tokenize};
use rstest::rstest;

mod test_util;
use test_util::{assert_approx, num, op};

fn postfix_of(src: &str) -> String {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("source {src:?} failed to lex: {e}"));
    let postfix = to_postfix(tokens).unwrap_or_else(|e| panic!("source {src:?} failed: {e}"));
    format_tokens(&postfix)
}

#[rstest]
#[case("3 + 5", "3 5 +")]
#[case("(3 + 5) * 2", "3 5 + 2 *")]
#[case("2 + 3 * 4", "2 3 4 * +")]
#[case("8 - 3 - 2", "8 3 - 2 -")]
#[case("2 ^ 3 ^ 2", "2 3 2 ^ ^")]
#[case("1 * 2 ^ 3 + 4", "1 2 3 ^ * 4 +")]
#[case("(1 + 2) / (3 - 4)", "1 2 + 3 4 - /")]
fn converts_text_to_postfix(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(postfix_of(src), expected);
}

#[test]
fn evaluates_postfix_directly() {
    let postfix = vec![num(3.0), num(5.0), op('+'), num(2.0), op('*')];
    let value = evaluate(postfix).unwrap_or_else(|e| panic!("evaluation failed: {e}"));
    assert_approx(value, 16.0);
}

#[test]
fn evaluator_checks_symbols_the_converter_never_saw() {
    let postfix = vec![num(3.0), num(5.0), Token::Operator('&')];
    assert_eq!(
        evaluate(postfix),
        Err(EvalError::UnknownOperator { symbol: '&' })
    );
}

#[test]
fn caller_copy_survives_conversion() {
    let infix = tokenize("6 / 3 * 2").unwrap_or_else(|e| panic!("lex failed: {e}"));
    let first = to_postfix(infix.iter().copied());
    let second = to_postfix(infix.iter().copied());
    assert_eq!(first, second);
    assert_eq!(infix.len(), 5);
}
