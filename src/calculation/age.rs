//! Age calculation.

use chrono::{Datelike, NaiveDate};

/// Returns the number of whole years elapsed between `birth_date` and `as_of`.
///
/// A year only counts once the birthday has been reached in `as_of`'s year.
/// Reference dates before the birth date yield 0.
///
/// # Example
///
/// ```
/// use personnel_engine::calculation::age_from_birthdate;
/// use chrono::NaiveDate;
///
/// let birth = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
/// let birthday = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
///
/// assert_eq!(age_from_birthdate(birth, day_before), 34);
/// assert_eq!(age_from_birthdate(birth, birthday), 35);
/// ```
pub fn age_from_birthdate(birth_date: NaiveDate, as_of: NaiveDate) -> u32 {
    let mut years = as_of.year() - birth_date.year();
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}
