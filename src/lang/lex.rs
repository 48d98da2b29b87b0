use super::token::*;

/// Tokenize one source line.
///
/// Blank lines and lines whose first non-whitespace character is the
/// comment marker produce no tokens. Comments are only recognized at the
/// start of a line.
pub fn lex(s: &str) -> Vec<Token> {
    if is_skipped(s) {
        return vec![];
    }
    Lexer {
        words: s.split_whitespace(),
        keyword: true,
    }
    .collect()
}

pub fn is_skipped(s: &str) -> bool {
    let s = s.trim();
    s.is_empty() || s.starts_with(COMMENT)
}

struct Lexer<'a> {
    words: std::str::SplitWhitespace<'a>,
    keyword: bool,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let word = self.words.next()?;
        if !self.keyword {
            return Some(Token::Operand(word.to_string()));
        }
        self.keyword = false;
        let upper = word.to_ascii_uppercase();
        match Word::from_keyword(&upper) {
            Some(w) => Some(Token::Word(w)),
            None => Some(Token::Unknown(upper)),
        }
    }
}
