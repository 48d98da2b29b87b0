use super::runtime::HEADER_NAME;

/// Width of one indentation level in generated code.
pub const INDENT: &str = "    ";

/// Name of the store instance owned by the generated `main`.
pub const STORE: &str = "store";

/// ## Generated C program
///
/// Body lines are kept without the fixed entry-point wrapper, which is
/// added when the program is rendered.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Program {
    lines: Vec<String>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn push(&mut self, level: usize, text: &str) {
        self.lines.push(format!("{}{}", INDENT.repeat(level), text));
    }

    pub fn comment(&mut self, level: usize, text: &str) {
        // a trailing backslash would splice the next line into the comment
        self.push(level, &format!("// {}", text.trim_end_matches('\\')));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "#include \"{}\"", HEADER_NAME)?;
        writeln!(f)?;
        writeln!(f, "int main(void) {{")?;
        writeln!(f, "{}Store {} = {{0}};", INDENT, STORE)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "{}return 0;", INDENT)?;
        writeln!(f, "}}")
    }
}
