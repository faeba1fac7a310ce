//! Date rules and derived employee fields.
//!
//! This module contains the pure date rules (age, retirement date, tenure)
//! and the before-persist calculator that applies them to employee records.

mod age;
mod derived_fields;
mod retirement;
mod tenure;

pub use age::age_from_birthdate;
pub use derived_fields::{
    DerivedFieldCalculator, NATIONAL_ID_LENGTH, employment_status, normalize_national_id,
    validate_date_ranges, validate_required,
};
pub use retirement::{RETIREMENT_AGE, RETIREMENT_DAY_CUTOFF, retirement_date_from_birthdate};
pub use tenure::{TENURE_BELOW_ONE_MONTH, TENURE_INVALID_RANGE, Tenure, tenure};
