/*!
## Rust Machine Module

This Rust module lowers parsed statements to C and supplies the runtime
library the generated program is built against.

*/

mod codegen;
mod program;
mod runtime;
mod stack;

pub use codegen::codegen;
pub use codegen::translate;
pub use codegen::Translation;
pub use program::Program;
pub use program::INDENT;
pub use runtime::Runtime;
pub use runtime::{HEADER_NAME, MAX_NAME_LEN, MAX_VARS, SOURCE_NAME};
pub use stack::Frame;
pub use stack::Stack;

#[cfg(test)]
mod tests;
