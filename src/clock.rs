//! Sources of the current calendar date.
//!
//! "Today" is the only input to this crate that is not a pure function of its
//! arguments. It is read through the [`Clock`] trait so that callers and tests
//! can pin it.

/// A source of the current Gregorian calendar date.
pub trait Clock {
    /// The current date as Gregorian (year, month, day).
    fn today(&self) -> (i32, u32, u32);
}

/// Reads the local date from the operating system.
#[cfg(feature = "chrono")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "chrono")]
impl Clock for SystemClock {
    fn today(&self) -> (i32, u32, u32) {
        use chrono::Datelike;

        let now = chrono::Local::now().date_naive();
        (now.year(), now.month(), now.day())
    }
}

/// A clock that always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    year: i32,
    month: u32,
    day: u32,
}

impl FixedClock {
    /// A clock pinned to the given Gregorian date.
    ///
    /// The date is not validated here; converting it reports any problem.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        FixedClock { year, month, day }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> (i32, u32, u32) {
        (**self).today()
    }
}
