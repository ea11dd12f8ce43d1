//! Proleptic Gregorian calendar arithmetic
//!
//! Julian Day Numbers are the common currency between calendars: a JDN counts
//! days continuously, so converting between Gregorian and Hijri is a matter of
//! going through it. The Gregorian rules here are applied proleptically, with
//! no switch to the Julian calendar before 1582.

/// Days in each month for non-leap years
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Earliest Gregorian year accepted by the conversions.
pub const MIN_YEAR: i32 = 1;

/// Latest Gregorian year accepted by the conversions.
pub const MAX_YEAR: i32 = 9999;

/// Returns true if the given year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month/year
///
/// Returns 0 when `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// Returns true if (year, month, day) names a real Gregorian date.
pub fn is_valid(year: i32, month: u32, day: u32) -> bool {
    day >= 1 && day <= days_in_month(year, month)
}

/// Convert a Gregorian date to a Julian Day Number.
///
/// # Arguments
/// * `year` - Gregorian year
/// * `month` - Gregorian month (1-12)
/// * `day` - Gregorian day (1-31)
pub fn to_jdn(year: i32, month: u32, day: u32) -> i64 {
    // Shift the year to start in March so the leap day falls at the end
    let a = (14 - i64::from(month)) / 12;
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;

    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Convert a Julian Day Number to a Gregorian date.
///
/// Valid for JDNs from -32044 (start of 4801 BCE) whose year fits in an
/// `i32`; outside that domain the result is meaningless or overflows.
///
/// # Returns
/// A tuple of (year, month, day)
pub fn from_jdn(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3) / 1461;
    let e = c - (1461 * d) / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;

    (year as i32, month as u32, day as u32)
}

/// Get the day of the week for a Julian Day Number.
///
/// # Returns
/// Day of week: 0 = Sunday, 1 = Monday, ..., 6 = Saturday
pub fn weekday_from_jdn(jdn: i64) -> u32 {
    // JDN 0 fell on a Monday
    (jdn + 1).rem_euclid(7) as u32
}
