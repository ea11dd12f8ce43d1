//! Parsed date patterns.
//!
//! A pattern such as `"D MONTH YYYY"` is split into fields and literal text.
//! Parsing never fails: anything that is not a recognized field is kept as
//! literal text, in order.
//!
//! | Token     | Output                                  |
//! |-----------|-----------------------------------------|
//! | `YYYY`    | year, zero-padded to 4 digits           |
//! | `YY`      | last two digits of the year             |
//! | `MONTH`   | month name in the requested locale      |
//! | `MM`, `M` | month number, padded / unpadded         |
//! | `DD`, `D` | day of month, padded / unpadded         |
//! | `WEEKDAY` | weekday name in the requested locale    |
//! | `[text]`  | `text`, verbatim                        |
//!
//! Keywords are matched anywhere, including inside words: `M` and `D` are
//! single letters, so `"DATE: D"` renders the day twice. Bracket uppercase
//! literal text, as in `"[DATE]: D"`.

pub mod lexer;

use lexer::{Lexer, Token};

/// A date field that a pattern can substitute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `YYYY` - year, zero-padded to at least 4 digits
    Year4,
    /// `YY` - last two digits of the year
    Year2,
    /// `MONTH` - localized month name
    MonthName,
    /// `MM` - month number, 2 digits
    Month2,
    /// `M` - month number
    Month,
    /// `DD` - day of month, 2 digits
    Day2,
    /// `D` - day of month
    Day,
    /// `WEEKDAY` - localized weekday name
    WeekdayName,
}

/// A part of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatPart {
    Field(Field),
    Literal(String),
}

/// A parsed date pattern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    parts: Vec<FormatPart>,
}

impl Pattern {
    /// Parse a pattern string.
    pub fn parse(input: &str) -> Pattern {
        let mut parts: Vec<FormatPart> = Vec::new();

        for token in Lexer::new(input) {
            match token {
                Token::Field(field) => parts.push(FormatPart::Field(field)),
                Token::Literal(c) => push_literal(&mut parts, &c.to_string()),
                Token::Escaped(text) => push_literal(&mut parts, text),
            }
        }

        Pattern { parts }
    }

    /// Returns the parts of this pattern in order.
    pub fn parts(&self) -> &[FormatPart] {
        &self.parts
    }

    /// Returns true if the pattern contains at least one field.
    pub fn has_fields(&self) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, FormatPart::Field(_)))
    }
}

// Adjacent literal text is merged into one part.
fn push_literal(parts: &mut Vec<FormatPart>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(FormatPart::Literal(last)) = parts.last_mut() {
        last.push_str(text);
    } else {
        parts.push(FormatPart::Literal(text.to_string()));
    }
}
