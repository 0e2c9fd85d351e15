//! Bracket balance checking library.
//!
//! This library decides whether the `()`, `[]` and `{}` brackets in a string
//! are correctly nested and matched.

mod check;
mod stack;

pub use check::{PAIRS, is_balanced, is_close_bracket, is_open_bracket, opening_for};
pub use stack::Stack;
