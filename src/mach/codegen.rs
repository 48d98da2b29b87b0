use super::program::STORE;
use super::{Program, Stack};
use crate::error;
use crate::lang::ast::{Command, Condition, Expression, Math, Operand, Statement};
use crate::lang::{self, Error, Line};
use log::{debug, warn};

type Result<T> = std::result::Result<T, Error>;

/// ## Output of one translation pass
///
/// Soft errors are written into the program as comments and also listed
/// in `diagnostics`. Blocks still open at the end of the source are not
/// closed; `open_blocks` counts them.

#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub program: Program,
    pub diagnostics: Vec<Error>,
    pub open_blocks: usize,
}

impl Translation {
    pub fn is_balanced(&self) -> bool {
        self.open_blocks == 0
    }
}

/// Translate source text into a C program.
pub fn translate(source: &str) -> Translation {
    let statements: Vec<Statement> = Line::lines(source).iter().map(Line::ast).collect();
    codegen(&statements)
}

pub fn codegen(statements: &[Statement]) -> Translation {
    let mut gen = Generator::new();
    for statement in statements {
        gen.statement(statement);
    }
    if !gen.stack.is_empty() {
        warn!("{} IF block(s) left open at end of source", gen.stack.len());
    }
    Translation {
        open_blocks: gen.stack.len(),
        program: gen.program,
        diagnostics: gen.diagnostics,
    }
}

struct Generator {
    stack: Stack,
    program: Program,
    diagnostics: Vec<Error>,
}

impl Generator {
    fn new() -> Generator {
        Generator {
            stack: Stack::new(),
            program: Program::new(),
            diagnostics: vec![],
        }
    }

    fn statement(&mut self, statement: &Statement) {
        debug!("line {}: {}", statement.line, statement.text);
        if let Err(e) = self.command(&statement.command) {
            let e = e.in_line_number(Some(statement.line));
            warn!("{}", e);
            self.program
                .comment(self.stack.level(), &format!("{}: {}", e, statement.text));
            self.diagnostics.push(e);
        }
    }

    fn command(&mut self, command: &Command) -> Result<()> {
        let level = self.stack.level();
        match command {
            Command::Var(ops) => {
                let name = first(ops)?;
                self.program.comment(
                    level,
                    &format!("VAR {}: storage is created on first assignment", name),
                );
            }
            Command::Set(ops) => {
                let name = first(ops)?;
                let value = ops[1..].join(" ");
                self.program.push(level, &set_var(name, &value));
            }
            Command::Input(ops) => {
                let name = first(ops)?;
                self.program.push(level, &set_var(name, "input_val()"));
            }
            Command::Print(ops) => {
                first(ops)?;
                let arg = Operand::classify(&ops.join(" "));
                self.program
                    .push(level, &format!("print_val({});", value(&arg)));
            }
            Command::Math(ops) => {
                let Math { target, expression } = lang::math(ops)?;
                let expr = match expression {
                    Expression::Copy(operand) => value(&operand),
                    Expression::Binary(left, op, right) => {
                        format!("{} {} {}", value(&left), op, value(&right))
                    }
                };
                self.program.push(level, &set_var(&target, &expr));
            }
            Command::If(ops) => {
                let Condition {
                    left,
                    comparator,
                    right,
                } = lang::condition(ops)?;
                self.program.push(
                    level,
                    &format!("if ({} {} {}) {{", value(&left), comparator, value(&right)),
                );
                self.stack.push_if();
            }
            Command::Else(_) => {
                self.stack.enter_else()?;
                self.program.push(level - 1, "} else {");
            }
            Command::Endif(_) => {
                self.stack.pop()?;
                self.program.push(self.stack.level(), "}");
            }
            Command::Unknown(keyword, _) => {
                return Err(error!(UnknownCommand; keyword.as_str()));
            }
        }
        Ok(())
    }
}

fn first(ops: &[String]) -> Result<&str> {
    match ops.first() {
        Some(s) => Ok(s),
        None => Err(error!(MissingOperand)),
    }
}

fn set_var(name: &str, value: &str) -> String {
    format!("set_var(&{}, {}, {});", STORE, quote(name), value)
}

/// Literals are inlined; anything else is looked up in the store.
fn value(operand: &Operand) -> String {
    match operand {
        Operand::Literal(s) => s.clone(),
        Operand::Variable(name) => format!("get_var(&{}, {})", STORE, quote(name)),
    }
}

fn quote(name: &str) -> String {
    let mut s = String::with_capacity(name.len() + 2);
    s.push('"');
    for ch in name.chars() {
        match ch {
            '\\' => s.push_str("\\\\"),
            '"' => s.push_str("\\\""),
            '\n' => s.push_str("\\n"),
            _ => s.push(ch),
        }
    }
    s.push('"');
    s
}
