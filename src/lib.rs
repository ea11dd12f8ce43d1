//! hijri-cal - Tabular Hijri (Islamic) calendar engine
//!
//! This crate converts between the proleptic Gregorian calendar and the
//! arithmetic (tabular) Hijri calendar, answers month-length and leap-year
//! questions from the fixed 30-year cycle, names and formats dates in English
//! and Arabic, and builds the 6×7 grid a month view displays.
//!
//! ```
//! use hijri_cal::{CalendarGrid, HijriDate, Locale};
//!
//! let date = HijriDate::from_gregorian(2023, 7, 19).unwrap();
//! assert_eq!(date.format("D MONTH YYYY", Locale::En), "1 Muharram 1445");
//!
//! let grid = CalendarGrid::for_date(&date);
//! assert_eq!(grid.cells().len(), 42);
//! ```

pub mod clock;
pub mod error;
pub mod grid;
pub mod gregorian;
pub mod hijri;
pub mod options;
pub mod pattern;

mod cache;
mod date;
mod formatter;
mod locale;

pub use clock::{Clock, FixedClock};
#[cfg(feature = "chrono")]
pub use clock::SystemClock;
pub use date::HijriDate;
pub use error::{Calendar, DateError};
pub use grid::{CalendarGrid, GridCell};
pub use locale::Locale;
pub use options::{Digits, FormatOptions};
pub use pattern::Pattern;
