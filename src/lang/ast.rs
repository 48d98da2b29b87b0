/// A parsed source line. The command keeps its operand tokens verbatim;
/// the shape of `MATH` and `IF` operands is only checked when code is
/// generated for them.
#[derive(Debug, PartialEq, Clone)]
pub struct Statement {
    pub line: usize,
    pub text: String,
    pub command: Command,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Var(Vec<String>),
    Set(Vec<String>),
    Input(Vec<String>),
    Print(Vec<String>),
    Math(Vec<String>),
    If(Vec<String>),
    Else(Vec<String>),
    Endif(Vec<String>),
    Unknown(String, Vec<String>),
}

impl Command {
    pub fn operands(&self) -> &[String] {
        use Command::*;
        match self {
            Var(v) | Set(v) | Input(v) | Print(v) | Math(v) | If(v) | Else(v) | Endif(v) => v,
            Unknown(_, v) => v,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operand {
    Literal(String),
    Variable(String),
}

impl Operand {
    /// An optional leading `-` followed by one or more ASCII digits is a
    /// literal. Anything else names a variable.
    pub fn classify(s: &str) -> Operand {
        if is_integer_literal(s) {
            Operand::Literal(s.to_string())
        } else {
            Operand::Variable(s.to_string())
        }
    }
}

pub fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Search order for the single operator of a `MATH` expression.
    pub const PRIORITY: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Copy(Operand),
    Binary(Operand, Operator, Operand),
}

/// `MATH target = expression`
#[derive(Debug, PartialEq, Clone)]
pub struct Math {
    pub target: String,
    pub expression: Expression,
}

/// `IF left comparator right`; the comparator is passed through untouched.
#[derive(Debug, PartialEq, Clone)]
pub struct Condition {
    pub left: Operand,
    pub comparator: String,
    pub right: Operand,
}
