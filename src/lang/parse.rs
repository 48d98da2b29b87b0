use super::{ast::*, token::*, Error, Line};

type Result<T> = std::result::Result<T, Error>;

/// Tag a line with its command. Never fails; anything unrecognized
/// becomes `Command::Unknown`.
pub fn parse(line: &Line) -> Statement {
    let mut tokens = line.tokens().iter();
    let keyword = tokens.next();
    let operands: Vec<String> = tokens.map(|t| t.to_string()).collect();
    let command = match keyword {
        Some(Token::Word(word)) => match word {
            Word::Var => Command::Var(operands),
            Word::Set => Command::Set(operands),
            Word::Input => Command::Input(operands),
            Word::Print => Command::Print(operands),
            Word::Math => Command::Math(operands),
            Word::If => Command::If(operands),
            Word::Else => Command::Else(operands),
            Word::Endif => Command::Endif(operands),
        },
        Some(other) => Command::Unknown(other.to_string(), operands),
        None => Command::Unknown(String::new(), operands),
    };
    Statement {
        line: line.number(),
        text: line.text().to_string(),
        command,
    }
}

/// Parse the operands of `MATH name = expr`.
///
/// The operator is the first of `+ - * /`, in that order, found anywhere
/// in the raw expression text. A negative literal can therefore be split
/// on its own sign, and an empty side is looked up as a variable with an
/// empty name, which fails when the program runs.
pub fn math(operands: &[String]) -> Result<Math> {
    let rest = operands.join(" ");
    let (target, expr) = match rest.split_once('=') {
        Some(split) => split,
        None => return Err(error!(SyntaxError; "EXPECTED =")),
    };
    let target = target.trim();
    let expr = expr.trim();
    for op in Operator::PRIORITY.iter() {
        let symbol = op.symbol();
        if !expr.contains(symbol) {
            continue;
        }
        if expr.matches(symbol).count() > 1 {
            return Err(error!(SyntaxError; format!("MORE THAN ONE {}", symbol)));
        }
        let (left, right) = match expr.split_once(symbol) {
            Some(split) => split,
            None => return Err(error!(InternalError)),
        };
        return Ok(Math {
            target: target.to_string(),
            expression: Expression::Binary(operand(left), *op, operand(right)),
        });
    }
    Ok(Math {
        target: target.to_string(),
        expression: Expression::Copy(operand(expr)),
    })
}

/// Parse the operands of `IF left cmp right`. Tokens past the third are
/// ignored.
pub fn condition(operands: &[String]) -> Result<Condition> {
    match operands {
        [left, comparator, right, ..] => Ok(Condition {
            left: Operand::classify(left),
            comparator: comparator.clone(),
            right: Operand::classify(right),
        }),
        _ => Err(error!(MissingOperand; "EXPECTED OPERAND COMPARATOR OPERAND")),
    }
}

fn operand(s: &str) -> Operand {
    Operand::classify(s.trim())
}
