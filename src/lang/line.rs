use super::ast::*;
use super::lex::*;
use super::parse::*;
use super::token::*;

/// ## One non-blank source line

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: usize,
    text: String,
    tokens: Vec<Token>,
}

impl Line {
    /// Returns `None` for blank and comment lines.
    pub fn new(number: usize, s: &str) -> Option<Line> {
        let tokens = lex(s);
        if tokens.is_empty() {
            return None;
        }
        Some(Line {
            number,
            text: s.trim().to_string(),
            tokens,
        })
    }

    /// Every line of `source` that carries a command, numbered from 1.
    pub fn lines(source: &str) -> Vec<Line> {
        source
            .lines()
            .enumerate()
            .filter_map(|(index, s)| Line::new(index + 1, s))
            .collect()
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn ast(&self) -> Statement {
        parse(self)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self.tokens.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", s.join(" "))
    }
}
