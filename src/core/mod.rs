//! Core domain types for black-peg code breaking
//!
//! Pure value types with no I/O: codes, symbols and peg feedback.

mod code;
mod evaluation;

pub use code::{Code, CodeError, SENTINEL, Symbol};
pub use evaluation::Evaluation;
