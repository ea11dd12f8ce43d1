//! Tabular Hijri (Islamic) calendar arithmetic
//!
//! This module implements the arithmetic Islamic calendar with the civil
//! ("Kuwaiti") epoch. It is a fixed approximation of the lunar calendar and
//! never consults moon sighting.
//!
//! ## Rules
//!
//! - Odd months have 30 days, even months have 29.
//! - Month 12 gains a 30th day in leap years.
//! - Leap years follow a 30-year cycle: year `y` is leap when
//!   `(11 * y + 14) mod 30 < 11`, i.e. years 2, 5, 7, 10, 13, 16, 18, 21, 24,
//!   26 and 29 of every cycle.
//! - 1 Muharram 1 AH is Julian Day Number 1948440 (Friday, 16 July 622 in the
//!   Julian calendar).
//!
//! The functions here accept any integer year, including zero and negative
//! years, so that callers can reason about days that spill over the edges of
//! the supported range. Range checks live in [`crate::HijriDate`].

/// Julian Day Number of 1 Muharram 1 AH.
pub const EPOCH_JDN: i64 = 1_948_440;

/// Days in one 30-year cycle (19 common years of 354 days, 11 leap years of 355).
pub const DAYS_PER_CYCLE: i64 = 10_631;

/// Days in a common year.
pub const COMMON_YEAR_DAYS: u32 = 354;

/// Days in a leap year.
pub const LEAP_YEAR_DAYS: u32 = 355;

/// Returns true if the given Hijri year has 355 days.
pub fn is_leap_year(year: i32) -> bool {
    (11 * i64::from(year) + 14).rem_euclid(30) < 11
}

/// Returns the number of days in a given Hijri month.
///
/// Returns 0 when `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        12 if is_leap_year(year) => 30,
        1..=12 if month % 2 == 1 => 30,
        1..=12 => 29,
        _ => 0,
    }
}

/// Returns the number of days in a given Hijri year.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        LEAP_YEAR_DAYS
    } else {
        COMMON_YEAR_DAYS
    }
}

/// Days from the start of the year to the first day of `month`.
fn days_before_month(month: u32) -> i64 {
    // ceil(29.5 * (month - 1))
    (59 * (i64::from(month) - 1) + 1) / 2
}

/// Julian Day Number of the first day of a Hijri year.
fn year_start_jdn(year: i32) -> i64 {
    let y = i64::from(year);
    354 * (y - 1) + (3 + 11 * y).div_euclid(30) + EPOCH_JDN
}

/// Convert a Hijri date to a Julian Day Number.
///
/// The components are not validated; out-of-range days simply count forward
/// from the start of the month.
pub fn to_jdn(year: i32, month: u32, day: u32) -> i64 {
    year_start_jdn(year) + days_before_month(month) + i64::from(day) - 1
}

/// Convert a Julian Day Number to a Hijri date.
///
/// Valid for JDNs whose Hijri year fits in an `i32`, roughly ±7.6e11 days
/// around the epoch; larger magnitudes overflow. Use
/// [`crate::HijriDate::from_jdn`] for unchecked input.
///
/// # Returns
/// A tuple of (hijri_year, hijri_month, hijri_day)
pub fn from_jdn(jdn: i64) -> (i32, u32, u32) {
    let estimate = (30 * (jdn - EPOCH_JDN) + 10_646).div_euclid(DAYS_PER_CYCLE);
    let mut year = estimate as i32;

    // The closed-form estimate is exact away from year boundaries; nudge it
    // by one when it lands on the wrong side of one.
    if jdn < year_start_jdn(year) {
        year -= 1;
    } else if jdn >= year_start_jdn(year + 1) {
        year += 1;
    }

    let day_of_year = jdn - year_start_jdn(year);
    let month = ((2 * day_of_year) / 59 + 1).min(12) as u32;
    let day = (day_of_year - days_before_month(month) + 1) as u32;

    (year, month, day)
}
