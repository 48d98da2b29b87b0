//! # etro
//!
//! Translate, build, and run a mini-language program.
//!

use std::process::ExitCode;

fn main() -> ExitCode {
    etro::term::main()
}
