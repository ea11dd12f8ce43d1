//! Month-view grids.
//!
//! A month view is always 6 rows of 7 days, Sunday first. The month's own days
//! sit in the middle; the rows are filled before and after with the closing
//! days of the previous month and the opening days of the next one.

use crate::date::HijriDate;
use crate::error::DateError;
use crate::hijri;

/// Columns in a grid row, one per weekday.
pub const GRID_COLUMNS: usize = 7;

/// Rows in a grid.
pub const GRID_ROWS: usize = 6;

/// Total cells in a grid.
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// One day in a month-view grid.
///
/// Spill-over cells at the very edges of the supported range may name year 0
/// or a year after [`HijriDate::MAX`]; those do not convert back to a
/// `HijriDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    /// True for days of the month the grid was built for.
    pub is_current_month: bool,
}

impl GridCell {
    const BLANK: GridCell = GridCell {
        day: 0,
        month: 0,
        year: 0,
        is_current_month: false,
    };

    /// Returns true if this cell shows `date`, e.g. to highlight today.
    pub fn is_date(&self, date: &HijriDate) -> bool {
        self.year == date.year() && self.month == date.month() && self.day == date.day()
    }

    /// The date this cell shows.
    pub fn to_date(&self) -> Result<HijriDate, DateError> {
        HijriDate::new(self.year, self.month, self.day)
    }
}

/// The 42-cell grid for one Hijri month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    year: i32,
    month: u32,
    cells: [GridCell; GRID_CELLS],
}

impl CalendarGrid {
    /// Build the grid for a Hijri month.
    ///
    /// # Errors
    ///
    /// Fails if day 1 of (year, month) is not a valid [`HijriDate`].
    pub fn build(year: i32, month: u32) -> Result<Self, DateError> {
        let first = HijriDate::new(year, month, 1)?;
        Ok(Self::for_date(&first))
    }

    /// Build the grid for the month containing `date`.
    pub fn for_date(date: &HijriDate) -> Self {
        let year = date.year();
        let month = date.month();
        let days_in_month = hijri::days_in_month(year, month);
        let leading = date.first_of_month().weekday();

        let (prev_year, prev_month) = if month == 1 {
            (year - 1, 12)
        } else {
            (year, month - 1)
        };
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let days_in_prev = hijri::days_in_month(prev_year, prev_month);

        log::trace!("building grid for {year}-{month:02}: {leading} leading days");

        let mut cells = [GridCell::BLANK; GRID_CELLS];
        let mut index = 0;

        for day in (days_in_prev - leading + 1)..=days_in_prev {
            cells[index] = GridCell {
                day,
                month: prev_month,
                year: prev_year,
                is_current_month: false,
            };
            index += 1;
        }

        for day in 1..=days_in_month {
            cells[index] = GridCell {
                day,
                month,
                year,
                is_current_month: true,
            };
            index += 1;
        }

        // At most 6 leading + 30 days = 36 cells, so this always fills the rest
        for (day, cell) in (1..).zip(cells[index..].iter_mut()) {
            *cell = GridCell {
                day,
                month: next_month,
                year: next_year,
                is_current_month: false,
            };
        }

        CalendarGrid { year, month, cells }
    }

    /// The Hijri year this grid was built for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The Hijri month this grid was built for.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// All 42 cells, row-major.
    pub fn cells(&self) -> &[GridCell; GRID_CELLS] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridCell> {
        self.cells.iter()
    }

    /// The six rows of seven cells, Sunday first.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> + '_ {
        self.cells.chunks_exact(GRID_COLUMNS)
    }

    /// Number of cells borrowed from the previous month (0..=6).
    pub fn leading_days(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| !cell.is_current_month)
            .count()
    }

    /// The cells belonging to the grid's own month.
    pub fn current_month_cells(&self) -> &[GridCell] {
        let start = self.leading_days();
        let len = hijri::days_in_month(self.year, self.month) as usize;
        &self.cells[start..start + len]
    }

    /// Index of the cell showing `date`, if it is on this grid.
    pub fn position_of(&self, date: &HijriDate) -> Option<usize> {
        self.cells.iter().position(|cell| cell.is_date(date))
    }
}

impl<'a> IntoIterator for &'a CalendarGrid {
    type Item = &'a GridCell;
    type IntoIter = std::slice::Iter<'a, GridCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
