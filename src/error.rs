//! Error types for date construction, conversion and locale lookup.

use std::fmt;

use thiserror::Error;

/// The calendar a date value was expressed in when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calendar {
    Gregorian,
    Hijri,
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calendar::Gregorian => f.write_str("gregorian"),
            Calendar::Hijri => f.write_str("hijri"),
        }
    }
}

/// Errors that can occur when building or converting dates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid date components: year {year}, month {month}, day {day}")]
    InvalidDateComponents { year: i32, month: u32, day: u32 },

    #[error("unsupported locale '{0}' (expected 'en' or 'ar')")]
    UnsupportedLocale(String),

    #[error("{calendar} date {year:04}-{month:02}-{day:02} is outside the supported range")]
    ConversionOutOfRange {
        calendar: Calendar,
        year: i32,
        month: u32,
        day: u32,
    },
}
