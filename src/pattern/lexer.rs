//! Lexer for tokenizing date pattern strings.
//!
//! The lexer scans a pattern left to right and at each position tries the
//! field keywords longest first, so `MONTH` wins over `MM` and `MM` over `M`.
//! It also handles:
//! - Bracketed text (`[at] `) becomes a single Escaped token without the brackets
//! - An unterminated `[` is an ordinary literal
//! - Every other character is a Literal token

use crate::pattern::Field;

/// Field keywords, longest first within each shared prefix.
const KEYWORDS: [(&str, Field); 8] = [
    ("WEEKDAY", Field::WeekdayName),
    ("MONTH", Field::MonthName),
    ("YYYY", Field::Year4),
    ("YY", Field::Year2),
    ("MM", Field::Month2),
    ("DD", Field::Day2),
    ("M", Field::Month),
    ("D", Field::Day),
];

/// A token in a date pattern string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Field(Field),
    Literal(char),
    Escaped(&'a str),
}

/// A lexer for date pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn rest(&self) -> &'a str {
        let input = self.input;
        &input[self.position..]
    }

    /// Returns the next token, or `None` at the end of input.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        let rest = self.rest();
        let ch = rest.chars().next()?;

        if ch == '[' {
            if let Some(close) = rest[1..].find(']') {
                let text = &rest[1..1 + close];
                self.position += close + 2;
                return Some(Token::Escaped(text));
            }
        }

        if let Some((keyword, field)) = KEYWORDS.iter().find(|(kw, _)| rest.starts_with(kw)) {
            self.position += keyword.len();
            return Some(Token::Field(*field));
        }

        self.position += ch.len_utf8();
        Some(Token::Literal(ch))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
