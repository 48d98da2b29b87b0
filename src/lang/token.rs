/// Marks a whole-line comment when it is the first non-whitespace character.
pub const COMMENT: char = '#';

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Word(Word),
    Unknown(String),
    Operand(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Word(s) => write!(f, "{}", s),
            Unknown(s) => write!(f, "{}", s),
            Operand(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Var,
    Set,
    Input,
    Print,
    Math,
    If,
    Else,
    Endif,
}

impl Word {
    /// Matches an already uppercased keyword.
    pub fn from_keyword(s: &str) -> Option<Word> {
        use Word::*;
        Some(match s {
            "VAR" => Var,
            "SET" => Set,
            "INPUT" => Input,
            "PRINT" => Print,
            "MATH" => Math,
            "IF" => If,
            "ELSE" => Else,
            "ENDIF" => Endif,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        let s = match self {
            Var => "VAR",
            Set => "SET",
            Input => "INPUT",
            Print => "PRINT",
            Math => "MATH",
            If => "IF",
            Else => "ELSE",
            Endif => "ENDIF",
        };
        write!(f, "{}", s)
    }
}
