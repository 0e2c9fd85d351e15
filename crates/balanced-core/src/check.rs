//! Bracket matching.

use crate::Stack;

/// Closing bracket to the opening bracket it must match.
pub const PAIRS: [(char, char); 3] = [(')', '('), (']', '['), ('}', '{')];

/// Check if `c` is an opening bracket.
#[must_use]
pub const fn is_open_bracket(c: char) -> bool {
    matches!(c, '(' | '[' | '{')
}

/// Check if `c` is a closing bracket.
#[must_use]
pub const fn is_close_bracket(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

/// Look up the opening bracket required by the closing bracket `close`.
#[must_use]
pub fn opening_for(close: char) -> Option<char> {
    PAIRS
        .iter()
        .find(|&&(c, _)| c == close)
        .map(|&(_, open)| open)
}

/// Check whether every bracket in `expr` is correctly nested and matched.
///
/// Characters other than `()[]{}` are ignored. Scanning stops at the first
/// closing bracket that has no matching opener on top of the stack.
#[must_use]
pub fn is_balanced(expr: &str) -> bool {
    let mut open = Stack::new();

    for c in expr.chars() {
        if is_open_bracket(c) {
            open.push(c);
        } else if let Some(required) = opening_for(c)
            && open.pop() != Some(required)
        {
            return false;
        }
    }

    open.is_empty()
}
