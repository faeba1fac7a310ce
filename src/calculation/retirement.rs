//! Retirement date calculation.
//!
//! Employees retire on the first day of a month in the year they turn
//! [`RETIREMENT_AGE`]. Employees born on or after day [`RETIREMENT_DAY_CUTOFF`]
//! of their birth month retire one month later than those born before it.

use chrono::{Datelike, Months, NaiveDate};

/// Age at which employees retire.
pub const RETIREMENT_AGE: i32 = 56;

/// Birth day-of-month from which retirement moves to the following month.
pub const RETIREMENT_DAY_CUTOFF: u32 = 10;

/// Computes the retirement date for a birth date.
///
/// The result is the 1st of the birth month, [`RETIREMENT_AGE`] years after
/// the birth year, plus one month when the birth day is on or after
/// [`RETIREMENT_DAY_CUTOFF`]. Returns `None` only when the date would fall
/// outside the representable calendar range.
///
/// # Example
///
/// ```
/// use personnel_engine::calculation::retirement_date_from_birthdate;
/// use chrono::NaiveDate;
///
/// let early = NaiveDate::from_ymd_opt(1987, 9, 5).unwrap();
/// assert_eq!(
///     retirement_date_from_birthdate(early),
///     NaiveDate::from_ymd_opt(2043, 9, 1)
/// );
///
/// let late = NaiveDate::from_ymd_opt(1968, 12, 25).unwrap();
/// assert_eq!(
///     retirement_date_from_birthdate(late),
///     NaiveDate::from_ymd_opt(2025, 1, 1)
/// );
/// ```
pub fn retirement_date_from_birthdate(birth_date: NaiveDate) -> Option<NaiveDate> {
    let first_of_month =
        NaiveDate::from_ymd_opt(birth_date.year() + RETIREMENT_AGE, birth_date.month(), 1)?;

    if birth_date.day() >= RETIREMENT_DAY_CUTOFF {
        first_of_month.checked_add_months(Months::new(1))
    } else {
        Some(first_of_month)
    }
}
