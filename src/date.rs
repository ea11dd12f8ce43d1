//! The `HijriDate` value type.
//!
//! A `HijriDate` is always a real date of the tabular calendar inside the
//! supported range, 1 Muharram 1 AH ([`HijriDate::MIN`]) through 2 Rabi'
//! al-Thani 9666 AH ([`HijriDate::MAX`]). That range maps exactly onto the
//! Gregorian dates 622-07-19 through 9999-12-31, so every `HijriDate` has a
//! Gregorian counterpart with a four-digit year.

use std::fmt;

use crate::cache;
use crate::clock::Clock;
use crate::error::{Calendar, DateError};
use crate::formatter::format_date;
use crate::gregorian;
use crate::hijri;
use crate::locale::Locale;
use crate::options::FormatOptions;

/// A date in the tabular Hijri calendar.
///
/// Equality and ordering compare (year, month, day), which is also
/// chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDate", into = "RawDate"))]
pub struct HijriDate {
    year: i32,
    month: u32,
    day: u32,
}

impl HijriDate {
    /// 1 Muharram 1 AH, the first supported date.
    pub const MIN: HijriDate = HijriDate {
        year: 1,
        month: 1,
        day: 1,
    };

    /// 2 Rabi' al-Thani 9666 AH, the Hijri date of Gregorian 9999-12-31.
    pub const MAX: HijriDate = HijriDate {
        year: 9666,
        month: 4,
        day: 2,
    };

    /// Create a Hijri date from year, month (1–12) and day of month.
    ///
    /// Invalid components are rejected, never clamped.
    ///
    /// # Errors
    ///
    /// * [`DateError::InvalidDateComponents`] if `year < 1`, `month` is not in
    ///   1..=12, or `day` is not in 1..=`days_in_month(year, month)`.
    /// * [`DateError::ConversionOutOfRange`] if the date is after [`HijriDate::MAX`].
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if year < 1
            || !(1..=12).contains(&month)
            || day == 0
            || day > hijri::days_in_month(year, month)
        {
            return Err(DateError::InvalidDateComponents { year, month, day });
        }

        let date = HijriDate { year, month, day };
        if date > Self::MAX {
            return Err(DateError::ConversionOutOfRange {
                calendar: Calendar::Hijri,
                year,
                month,
                day,
            });
        }
        Ok(date)
    }

    /// Today's date according to the local system clock.
    #[cfg(feature = "chrono")]
    pub fn today() -> Result<Self, DateError> {
        Self::today_with(&crate::clock::SystemClock)
    }

    /// Today's date according to the given clock.
    pub fn today_with<C: Clock + ?Sized>(clock: &C) -> Result<Self, DateError> {
        let (year, month, day) = clock.today();
        Self::from_gregorian(year, month, day)
    }

    /// Convert a proleptic Gregorian date to a Hijri date.
    ///
    /// # Errors
    ///
    /// * [`DateError::InvalidDateComponents`] if the Gregorian date does not exist.
    /// * [`DateError::ConversionOutOfRange`] if it is before 622-07-19 (1 Muharram 1 AH)
    ///   or after 9999-12-31.
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !gregorian::is_valid(year, month, day) {
            return Err(DateError::InvalidDateComponents { year, month, day });
        }

        let out_of_range = DateError::ConversionOutOfRange {
            calendar: Calendar::Gregorian,
            year,
            month,
            day,
        };
        if !(gregorian::MIN_YEAR..=gregorian::MAX_YEAR).contains(&year) {
            return Err(out_of_range);
        }

        let jdn = gregorian::to_jdn(year, month, day);
        if jdn < hijri::EPOCH_JDN {
            return Err(out_of_range);
        }
        Ok(Self::from_jdn_unchecked(jdn))
    }

    /// Create a Hijri date from a Julian Day Number.
    ///
    /// # Errors
    ///
    /// [`DateError::ConversionOutOfRange`] if the day falls outside
    /// [`HijriDate::MIN`]..=[`HijriDate::MAX`]. The error carries the
    /// components of the range end that was crossed.
    pub fn from_jdn(jdn: i64) -> Result<Self, DateError> {
        // Out-of-range days are never converted; large JDNs overflow hijri::from_jdn.
        let nearest = if jdn < Self::MIN.jdn() {
            Self::MIN
        } else if jdn > Self::MAX.jdn() {
            Self::MAX
        } else {
            return Ok(Self::from_jdn_unchecked(jdn));
        };
        Err(DateError::ConversionOutOfRange {
            calendar: Calendar::Hijri,
            year: nearest.year,
            month: nearest.month,
            day: nearest.day,
        })
    }

    fn from_jdn_unchecked(jdn: i64) -> Self {
        let (year, month, day) = hijri::from_jdn(jdn);
        debug_assert!(year >= 1 && day <= hijri::days_in_month(year, month));
        HijriDate { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The Julian Day Number of this date.
    pub fn jdn(&self) -> i64 {
        hijri::to_jdn(self.year, self.month, self.day)
    }

    /// The equivalent proleptic Gregorian date as (year, month, day).
    pub fn to_gregorian(&self) -> (i32, u32, u32) {
        gregorian::from_jdn(self.jdn())
    }

    /// Day of the week: 0 = Sunday … 6 = Saturday.
    pub fn weekday(&self) -> u32 {
        gregorian::weekday_from_jdn(self.jdn())
    }

    /// Day of the year, 1-based.
    pub fn day_of_year(&self) -> u32 {
        (self.jdn() - hijri::to_jdn(self.year, 1, 1) + 1) as u32
    }

    /// Number of days (29 or 30) in the given Hijri month.
    ///
    /// Returns 0 when `month` is outside 1..=12.
    pub fn days_in_month(year: i32, month: u32) -> u32 {
        hijri::days_in_month(year, month)
    }

    /// Returns true if the Hijri year has 355 days.
    pub fn is_leap_year(year: i32) -> bool {
        hijri::is_leap_year(year)
    }

    /// Number of days in this date's month.
    pub fn days_in_current_month(&self) -> u32 {
        hijri::days_in_month(self.year, self.month)
    }

    /// Number of days (354 or 355) in this date's year.
    pub fn days_in_year(&self) -> u32 {
        hijri::days_in_year(self.year)
    }

    pub fn is_in_leap_year(&self) -> bool {
        hijri::is_leap_year(self.year)
    }

    /// Localized name of this date's month.
    pub fn month_name(&self, locale: Locale) -> &'static str {
        locale.month_name(self.month).unwrap_or_default()
    }

    /// Localized name of this date's weekday.
    pub fn weekday_name(&self, locale: Locale) -> &'static str {
        locale.weekday_name(self.weekday()).unwrap_or_default()
    }

    /// Format this date with a pattern such as `"D MONTH YYYY"`.
    ///
    /// Numbers use Latin digits. See [`crate::pattern`] for the tokens.
    pub fn format(&self, pattern: &str, locale: Locale) -> String {
        self.format_with(pattern, &FormatOptions::with_locale(locale))
    }

    /// Format this date with explicit options.
    pub fn format_with(&self, pattern: &str, opts: &FormatOptions) -> String {
        let parsed = cache::get_or_parse(pattern);
        format_date(self, &parsed, opts)
    }

    /// The first day of this date's month.
    pub fn first_of_month(&self) -> HijriDate {
        HijriDate { day: 1, ..*self }
    }

    /// The first day of the previous month, rolling back a year from Muharram.
    ///
    /// # Errors
    ///
    /// Fails for dates in Muharram of year 1.
    pub fn previous_month(&self) -> Result<HijriDate, DateError> {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        HijriDate::new(year, month, 1)
    }

    /// The first day of the next month, rolling into a new year after Dhu al-Hijjah.
    ///
    /// # Errors
    ///
    /// Fails when the next month starts after [`HijriDate::MAX`].
    pub fn next_month(&self) -> Result<HijriDate, DateError> {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        HijriDate::new(year, month, 1)
    }

    /// The date `days` days after this one (before it, if negative).
    pub fn add_days(&self, days: i64) -> Result<HijriDate, DateError> {
        let jdn = self
            .jdn()
            .checked_add(days)
            .ok_or(DateError::ConversionOutOfRange {
                calendar: Calendar::Hijri,
                year: self.year,
                month: self.month,
                day: self.day,
            })?;
        HijriDate::from_jdn(jdn)
    }

    /// Signed number of days from `other` to `self`.
    pub fn days_since(&self, other: &HijriDate) -> i64 {
        self.jdn() - other.jdn()
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for HijriDate {
    type Error = DateError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;

        HijriDate::from_gregorian(date.year(), date.month(), date.day())
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<HijriDate> for chrono::NaiveDate {
    type Error = DateError;

    fn try_from(date: HijriDate) -> Result<Self, Self::Error> {
        let (year, month, day) = date.to_gregorian();
        chrono::NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::ConversionOutOfRange {
            calendar: Calendar::Gregorian,
            year,
            month,
            day,
        })
    }
}

/// Unvalidated wire form; deserialization goes through [`HijriDate::new`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawDate {
    year: i32,
    month: u32,
    day: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDate> for HijriDate {
    type Error = DateError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        HijriDate::new(raw.year, raw.month, raw.day)
    }
}

#[cfg(feature = "serde")]
impl From<HijriDate> for RawDate {
    fn from(date: HijriDate) -> Self {
        RawDate {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_ends_match_gregorian() {
        assert_eq!(HijriDate::MIN.to_gregorian(), (622, 7, 19));
        assert_eq!(HijriDate::MAX.to_gregorian(), (9999, 12, 31));
        assert_eq!(HijriDate::MIN.jdn(), hijri::EPOCH_JDN);
    }

    #[test]
    fn test_new_rejects_day_beyond_month() {
        assert!(HijriDate::new(1445, 2, 30).is_err());
        assert!(HijriDate::new(1444, 12, 30).is_err());
        assert!(HijriDate::new(1445, 12, 30).is_ok());
    }

    #[test]
    fn test_from_jdn_bounds() {
        assert_eq!(HijriDate::from_jdn(hijri::EPOCH_JDN), Ok(HijriDate::MIN));
        assert!(HijriDate::from_jdn(hijri::EPOCH_JDN - 1).is_err());
        assert_eq!(HijriDate::from_jdn(HijriDate::MAX.jdn()), Ok(HijriDate::MAX));
        assert!(HijriDate::from_jdn(HijriDate::MAX.jdn() + 1).is_err());
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(HijriDate::new(1445, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(HijriDate::new(1445, 2, 1).unwrap().day_of_year(), 31);
        assert_eq!(HijriDate::new(1445, 12, 30).unwrap().day_of_year(), 355);
    }

    #[test]
    fn test_display() {
        assert_eq!(HijriDate::new(1445, 9, 1).unwrap().to_string(), "1445-09-01");
        assert_eq!(HijriDate::MIN.to_string(), "0001-01-01");
    }
}
