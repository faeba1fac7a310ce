//! Tenure calculation.
//!
//! Tenure is the elapsed time in role, expressed in whole years and the
//! remaining whole months, and rendered as Indonesian text.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Text used when less than one whole month has elapsed.
pub const TENURE_BELOW_ONE_MONTH: &str = "Kurang dari 1 bulan";

/// Text used when the end date precedes the start date.
pub const TENURE_INVALID_RANGE: &str = "Rentang tanggal tidak valid";

/// An elapsed interval in whole years and remaining whole months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenure {
    /// Whole years.
    pub years: u32,
    /// Whole months after the last whole year (0-11).
    pub months: u32,
}

impl Tenure {
    /// Computes the interval from `start` to `end`.
    ///
    /// A month counts once `end`'s day-of-month reaches `start`'s. Returns
    /// `None` when `end` precedes `start`.
    ///
    /// # Example
    ///
    /// ```
    /// use personnel_engine::calculation::Tenure;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2023, 5, 14).unwrap();
    /// assert_eq!(Tenure::between(start, end), Some(Tenure { years: 3, months: 1 }));
    /// ```
    pub fn between(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if end < start {
            return None;
        }

        let mut total_months =
            (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
        if end.day() < start.day() {
            total_months -= 1;
        }

        let total_months = u32::try_from(total_months).unwrap_or(0);
        Some(Self {
            years: total_months / 12,
            months: total_months % 12,
        })
    }

    /// Renders the interval as display text.
    pub fn describe(&self) -> String {
        match (self.years, self.months) {
            (0, 0) => TENURE_BELOW_ONE_MONTH.to_string(),
            (0, months) => format!("{} bulan", months),
            (years, 0) => format!("{} tahun", years),
            (years, months) => format!("{} tahun {} bulan", years, months),
        }
    }
}

/// Describes the tenure from `start` to `end`, or to `as_of` while the
/// employment is open-ended.
///
/// Never fails: an inverted range yields [`TENURE_INVALID_RANGE`].
///
/// # Example
///
/// ```
/// use personnel_engine::calculation::{tenure, TENURE_BELOW_ONE_MONTH};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// assert_eq!(tenure(start, None, start), TENURE_BELOW_ONE_MONTH);
///
/// let end = NaiveDate::from_ymd_opt(2027, 5, 1).unwrap();
/// assert_eq!(tenure(start, Some(end), start), "2 tahun");
/// ```
pub fn tenure(start: NaiveDate, end: Option<NaiveDate>, as_of: NaiveDate) -> String {
    match Tenure::between(start, end.unwrap_or(as_of)) {
        Some(interval) => interval.describe(),
        None => TENURE_INVALID_RANGE.to_string(),
    }
}
