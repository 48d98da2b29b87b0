/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the
mini-language, one line at a time.

*/

pub type LineNumber = Option<usize>;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::{is_skipped, lex};
pub use line::Line;
pub use parse::{condition, math, parse};

pub mod ast;
pub mod token;

#[cfg(test)]
mod tests;
