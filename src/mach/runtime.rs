/*!
## Runtime library

Generated programs link against a small fixed C library that owns
variable storage. Its text never depends on the program being built.

A `Store` is declared by the generated entry point and passed by
reference to `get_var` and `set_var`. It holds at most `MAX_VARS`
records in insertion order. Names are truncated to 31 characters and
both lookup and insert scan linearly, so the first match wins. Lookup of
an unknown name, inserting past capacity, and a malformed integer on
standard input all terminate the program with status 1.

*/

pub const HEADER_NAME: &str = "langlib.h";
pub const SOURCE_NAME: &str = "langlib.c";

/// Number of variables a generated program can hold.
pub const MAX_VARS: usize = 100;

/// Visible characters kept from a variable name.
pub const MAX_NAME_LEN: usize = 31;

const HEADER: &str = include_str!("runtime/langlib.h");
const SOURCE: &str = include_str!("runtime/langlib.c");

#[derive(Debug, Default, Clone, Copy)]
pub struct Runtime;

impl Runtime {
    pub fn header(&self) -> &'static str {
        HEADER
    }

    pub fn source(&self) -> &'static str {
        SOURCE
    }

    /// File name and content of each library artifact.
    pub fn files(&self) -> [(&'static str, &'static str); 2] {
        [(HEADER_NAME, HEADER), (SOURCE_NAME, SOURCE)]
    }
}
