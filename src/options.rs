//! Formatting options and configuration.

use crate::locale::{Locale, ARABIC_INDIC_DIGITS};

/// The digit glyphs used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Digits {
    /// ASCII digits 0-9
    #[default]
    Latin,
    /// Arabic-Indic digits ٠-٩
    ArabicIndic,
}

impl Digits {
    /// Map an ASCII digit to this digit style. Other characters are returned unchanged.
    pub fn map_char(&self, c: char) -> char {
        match (self, c.to_digit(10)) {
            (Digits::ArabicIndic, Some(n)) => ARABIC_INDIC_DIGITS[n as usize],
            _ => c,
        }
    }

    /// Rewrite every ASCII digit in `s` into this digit style.
    pub fn apply(&self, s: &str) -> String {
        match self {
            Digits::Latin => s.to_string(),
            Digits::ArabicIndic => s.chars().map(|c| self.map_char(c)).collect(),
        }
    }
}

/// Options for formatting dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatOptions {
    /// The locale for month and weekday names.
    pub locale: Locale,
    /// The digits used for day, month and year numbers.
    pub digits: Digits,
}

impl FormatOptions {
    /// Options using the locale's native digits (Arabic-Indic for Arabic).
    pub fn for_locale(locale: Locale) -> Self {
        let digits = match locale {
            Locale::En => Digits::Latin,
            Locale::Ar => Digits::ArabicIndic,
        };
        FormatOptions { locale, digits }
    }

    /// Options with the given locale and Latin digits.
    pub fn with_locale(locale: Locale) -> Self {
        FormatOptions {
            locale,
            digits: Digits::Latin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_indic_digits() {
        assert_eq!(Digits::ArabicIndic.apply("1445"), "١٤٤٥");
        assert_eq!(Digits::ArabicIndic.apply("a-9"), "a-٩");
        assert_eq!(Digits::Latin.apply("1445"), "1445");
    }
}
