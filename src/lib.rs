//! # etro
//!
//! A line-oriented mini-language with integer variables, single-operator
//! arithmetic, and nested `IF`/`ELSE` blocks. Programs are translated to C,
//! built with the native C compiler, and run.
//!
//! ```text
//! $ cat count.etro
//! SET x 5
//! MATH y = x * 2
//! PRINT y
//! $ etro count.etro
//! Compiling with: gcc -O2 /tmp/prog.c /tmp/langlib.c -o /tmp/count_binary
//! Compilation succeeded.
//! Running /tmp/count_binary:
//!
//! 10
//! ```
//!
//! The generated program and the runtime library are written next to the
//! source file and removed again once the program finishes, unless
//! `--keep-intermediates` is given.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/commands.rs"]
#[allow(non_snake_case)]
pub mod __Commands;

pub mod build;
pub mod lang;
pub mod mach;
pub mod term;
