//! Locales for month and weekday naming.

mod builtin;

use std::fmt;
use std::str::FromStr;

use crate::error::DateError;

pub(crate) use builtin::ARABIC_INDIC_DIGITS;

/// A display locale.
///
/// Only English (transliterated month names) and Arabic (Arabic-script names)
/// are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// Resolve a locale tag, falling back to English for anything unsupported.
    ///
    /// Use this on display paths where a bad tag should not abort rendering.
    /// Use [`str::parse`] to reject unsupported tags instead.
    pub fn resolve(tag: &str) -> Locale {
        match tag.parse() {
            Ok(locale) => locale,
            Err(_) => {
                log::warn!("unsupported locale '{tag}', falling back to English");
                Locale::En
            }
        }
    }

    /// The two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Returns true for right-to-left scripts.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }

    /// Name of a Hijri month (1 = Muharram … 12 = Dhu al-Hijjah).
    ///
    /// Returns `None` if `month` is outside 1..=12.
    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        let index = month.checked_sub(1)? as usize;
        let names = match self {
            Locale::En => &builtin::MONTH_NAMES_EN,
            Locale::Ar => &builtin::MONTH_NAMES_AR,
        };
        names.get(index).copied()
    }

    /// Full weekday name (0 = Sunday … 6 = Saturday).
    pub fn weekday_name(&self, weekday: u32) -> Option<&'static str> {
        let names = match self {
            Locale::En => &builtin::DAY_NAMES_EN,
            Locale::Ar => &builtin::DAY_NAMES_AR,
        };
        names.get(weekday as usize).copied()
    }

    /// Short weekday name for grid headers (0 = Sunday … 6 = Saturday).
    pub fn weekday_short(&self, weekday: u32) -> Option<&'static str> {
        let names = match self {
            Locale::En => &builtin::DAY_NAMES_SHORT_EN,
            Locale::Ar => &builtin::DAY_NAMES_SHORT_AR,
        };
        names.get(weekday as usize).copied()
    }

    /// The seven short weekday names, Sunday first, matching grid columns.
    pub fn weekday_headers(&self) -> [&'static str; 7] {
        match self {
            Locale::En => builtin::DAY_NAMES_SHORT_EN,
            Locale::Ar => builtin::DAY_NAMES_SHORT_AR,
        }
    }
}

impl FromStr for Locale {
    type Err = DateError;

    /// Parse a locale tag such as `en`, `ar`, `en-US` or `ar_SA`.
    ///
    /// Only the primary language subtag is considered.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.trim().split(['-', '_']).next().unwrap_or_default();

        if primary.eq_ignore_ascii_case("en") {
            Ok(Locale::En)
        } else if primary.eq_ignore_ascii_case("ar") {
            Ok(Locale::Ar)
        } else {
            Err(DateError::UnsupportedLocale(s.to_string()))
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("AR".parse::<Locale>(), Ok(Locale::Ar));
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("ar_SA".parse::<Locale>(), Ok(Locale::Ar));
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(DateError::UnsupportedLocale("fr".to_string()))
        );
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_resolve_falls_back() {
        assert_eq!(Locale::resolve("ar"), Locale::Ar);
        assert_eq!(Locale::resolve("de"), Locale::En);
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(Locale::En.month_name(1), Some("Muharram"));
        assert_eq!(Locale::En.month_name(12), Some("Dhu al-Hijjah"));
        assert_eq!(Locale::Ar.month_name(9), Some("رمضان"));
        assert_eq!(Locale::En.month_name(0), None);
        assert_eq!(Locale::En.month_name(13), None);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Locale::En.weekday_name(5), Some("Friday"));
        assert_eq!(Locale::Ar.weekday_name(5), Some("الجمعة"));
        assert_eq!(Locale::En.weekday_short(0), Some("Sun"));
        assert_eq!(Locale::En.weekday_name(7), None);
        assert_eq!(Locale::En.weekday_headers()[6], "Sat");
    }
}
