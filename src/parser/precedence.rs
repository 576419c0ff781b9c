//! Operator precedence table for arithmetic expressions.
//!
//! This module centralizes precedence and associativity for the binary
//! operators. The converter only asks the questions defined here, so
//! adjusting operator rules never touches the shunting-yard loop itself.

use phf::phf_map;

/// Grouping direction for a chain of equal-precedence operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Binding rules for a single operator symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub precedence: i8,
    pub associativity: Associativity,
}

/// Precedence reported for symbols missing from the table.
pub const UNKNOWN_PRECEDENCE: i8 = -1;

static OPERATORS: phf::Map<char, OperatorInfo> = phf_map! {
    '+' => OperatorInfo { precedence: 1, associativity: Associativity::Left },
    '-' => OperatorInfo { precedence: 1, associativity: Associativity::Left },
    '*' => OperatorInfo { precedence: 2, associativity: Associativity::Left },
    '/' => OperatorInfo { precedence: 2, associativity: Associativity::Left },
    '^' => OperatorInfo { precedence: 3, associativity: Associativity::Right },
};

/// Lookup the binding rules for `symbol`.
#[must_use]
pub fn operator_info(symbol: char) -> Option<OperatorInfo> {
    OPERATORS.get(&symbol).copied()
}

/// Precedence of `symbol`; higher binds tighter.
///
/// Symbols outside the table report [`UNKNOWN_PRECEDENCE`].
#[must_use]
pub fn precedence(symbol: char) -> i8 {
    operator_info(symbol).map_or(UNKNOWN_PRECEDENCE, |info| info.precedence)
}

/// Returns `true` when `symbol` groups right to left.
#[must_use]
pub fn is_right_associative(symbol: char) -> bool {
    matches!(
        operator_info(symbol),
        Some(OperatorInfo {
            associativity: Associativity::Right,
            ..
        })
    )
}

/// Decide whether `stack_top` must be emitted before `incoming` is pushed.
///
/// A right-associative `incoming` only yields to strictly tighter operators,
/// so `2 ^ 3 ^ 2` nests to the right. Left-associative operators also yield to
/// equal precedence, so `8 - 3 - 2` groups to the left.
#[must_use]
pub fn should_pop(stack_top: char, incoming: char) -> bool {
    if is_right_associative(incoming) {
        precedence(stack_top) > precedence(incoming)
    } else {
        precedence(stack_top) >= precedence(incoming)
    }
}
