//! School-year resolution
//!
//! The academic year rolls over after July 15th, independent of the exact
//! term start. Dates up to and including the 15th belong to the previous
//! school year.

use crate::config::{DEFAULT_YEAR_DELIMITER, SCHOOL_YEAR_ROLLOVER};
use chrono::{Datelike, NaiveDate};

/// Source of "today" for year computation.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock frozen at a given date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Compute the school-year label for `date`, e.g. `"2024/2025"`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use minelev_engine::school_year::school_year;
///
/// let before = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
/// let after = NaiveDate::from_ymd_opt(2024, 7, 16).unwrap();
/// assert_eq!(school_year(before, "/"), "2023/2024");
/// assert_eq!(school_year(after, "/"), "2024/2025");
/// ```
pub fn school_year(date: NaiveDate, delimiter: &str) -> String {
    let year = date.year();
    let (month, day) = SCHOOL_YEAR_ROLLOVER;
    if (date.month(), date.day()) > (month, day) {
        format!("{}{}{}", year, delimiter, year + 1)
    } else {
        format!("{}{}{}", year - 1, delimiter, year)
    }
}

/// School-year label for the clock's current date with the default delimiter.
pub fn current_school_year(clock: &dyn Clock) -> String {
    school_year(clock.today(), DEFAULT_YEAR_DELIMITER)
}
