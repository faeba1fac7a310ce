//! Derived employee fields.
//!
//! The [`DerivedFieldCalculator`] is the before-persist step of every employee
//! write. It validates paired dates, normalises the national id, and keeps
//! age, tenure, retirement date, and employment status consistent with the
//! source dates.

use chrono::NaiveDate;

use crate::config::EmployeeDefaults;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmploymentStatus};

use super::age::age_from_birthdate;
use super::retirement::retirement_date_from_birthdate;
use super::tenure::tenure;

/// Number of digits in a national identity number.
pub const NATIONAL_ID_LENGTH: usize = 16;

/// Returns the employment status implied by a work-end date.
///
/// Employment is active while `today` is on or before the end date. Without
/// an end date the employee is inactive.
///
/// # Example
///
/// ```
/// use personnel_engine::calculation::employment_status;
/// use personnel_engine::models::EmploymentStatus;
/// use chrono::NaiveDate;
///
/// let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
/// assert_eq!(employment_status(Some(end), end), EmploymentStatus::Active);
/// assert_eq!(employment_status(None, end), EmploymentStatus::Inactive);
/// ```
pub fn employment_status(work_end: Option<NaiveDate>, today: NaiveDate) -> EmploymentStatus {
    match work_end {
        Some(end) if today <= end => EmploymentStatus::Active,
        _ => EmploymentStatus::Inactive,
    }
}

/// Normalises a national id to digits only and checks its length.
///
/// Blank input normalises to `None`.
///
/// # Example
///
/// ```
/// use personnel_engine::calculation::normalize_national_id;
///
/// let normalized = normalize_national_id("3171-0123 4567 8901").unwrap();
/// assert_eq!(normalized.as_deref(), Some("3171012345678901"));
/// assert!(normalize_national_id("12345").is_err());
/// ```
pub fn normalize_national_id(raw: &str) -> EngineResult<Option<String>> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        return Err(EngineError::InvalidEmployee {
            field: "national_id".to_string(),
            message: "must contain digits".to_string(),
        });
    }

    if digits.len() != NATIONAL_ID_LENGTH {
        return Err(EngineError::InvalidEmployee {
            field: "national_id".to_string(),
            message: format!(
                "must be exactly {} digits, got {}",
                NATIONAL_ID_LENGTH,
                digits.len()
            ),
        });
    }

    Ok(Some(digits))
}

/// Checks that every end date is strictly after its paired start date.
pub fn validate_date_ranges(employee: &Employee) -> EngineResult<()> {
    let pairs = [
        (
            "assignment_start",
            employee.assignment_start,
            "assignment_end",
            employee.assignment_end,
        ),
        ("work_start", employee.work_start, "work_end", employee.work_end),
    ];

    for (start_field, start, end_field, end) in pairs {
        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                return Err(EngineError::InvalidDateRange {
                    start_field,
                    end_field,
                    start,
                    end,
                });
            }
        }
    }

    Ok(())
}

/// Trims the identifying text fields and rejects blank ones.
///
/// # Errors
///
/// Returns [`EngineError::InvalidEmployee`] naming the first blank field.
pub fn validate_required(employee: &mut Employee) -> EngineResult<()> {
    for (field, value) in [
        ("employee_number", &mut employee.employee_number),
        ("full_name", &mut employee.full_name),
    ] {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: field.to_string(),
                message: "must not be blank".to_string(),
            });
        }
        if trimmed.len() != value.len() {
            *value = trimmed.to_string();
        }
    }
    Ok(())
}

/// Computes derived employee fields before a record is persisted.
#[derive(Debug, Clone)]
pub struct DerivedFieldCalculator {
    defaults: EmployeeDefaults,
}

impl DerivedFieldCalculator {
    /// Creates a calculator that fills in the given defaults on creation.
    pub fn new(defaults: EmployeeDefaults) -> Self {
        Self { defaults }
    }

    /// Prepares a new record for its first write.
    ///
    /// A supplied age is kept; otherwise it is computed from the birth date.
    /// The retirement date is always derived from the birth date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDateRange`] if an end date is not after
    /// its start date, or [`EngineError::InvalidEmployee`] for a blank
    /// identifying field or a malformed national id.
    pub fn prepare_create(&self, employee: &mut Employee, today: NaiveDate) -> EngineResult<()> {
        validate_required(employee)?;
        validate_date_ranges(employee)?;
        self.normalize_identity(employee)?;

        if let Some(start) = employee.work_start {
            employee.tenure = Some(tenure(start, employee.work_end, today));
            employee
                .workplace
                .get_or_insert_with(|| self.defaults.default_workplace.clone());
            employee
                .branch
                .get_or_insert_with(|| self.defaults.default_branch.clone());
        }

        if let Some(birth) = employee.birth_date {
            employee
                .age
                .get_or_insert_with(|| age_from_birthdate(birth, today));
            employee.retirement_date = retirement_date_from_birthdate(birth);
        }

        employee.status = employment_status(employee.work_end, today);
        Ok(())
    }

    /// Prepares an updated record, recomputing only what its changes affect.
    ///
    /// # Errors
    ///
    /// Same as [`DerivedFieldCalculator::prepare_create`].
    pub fn prepare_update(
        &self,
        previous: &Employee,
        employee: &mut Employee,
        today: NaiveDate,
    ) -> EngineResult<()> {
        validate_required(employee)?;
        validate_date_ranges(employee)?;
        self.normalize_identity(employee)?;

        if employee.birth_date != previous.birth_date {
            self.apply_birth_date(employee, today);
        }

        if employee.work_start != previous.work_start || employee.work_end != previous.work_end {
            employee.tenure = employee
                .work_start
                .map(|start| tenure(start, employee.work_end, today));
            employee.status = employment_status(employee.work_end, today);
        }

        Ok(())
    }

    /// Recomputes the fields that drift with the calendar for a read snapshot.
    pub fn refresh(&self, employee: &mut Employee, today: NaiveDate) {
        if let Some(birth) = employee.birth_date {
            employee.age = Some(age_from_birthdate(birth, today));
        }
        if let Some(start) = employee.work_start {
            employee.tenure = Some(tenure(start, employee.work_end, today));
        }
        employee.status = employment_status(employee.work_end, today);
    }

    fn normalize_identity(&self, employee: &mut Employee) -> EngineResult<()> {
        if let Some(raw) = employee.national_id.take() {
            employee.national_id = normalize_national_id(&raw)?;
        }
        Ok(())
    }

    fn apply_birth_date(&self, employee: &mut Employee, today: NaiveDate) {
        match employee.birth_date {
            Some(birth) => {
                employee.age = Some(age_from_birthdate(birth, today));
                employee.retirement_date = retirement_date_from_birthdate(birth);
            }
            None => {
                employee.age = None;
                employee.retirement_date = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::TENURE_BELOW_ONE_MONTH;
    use crate::models::NewEmployee;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calculator() -> DerivedFieldCalculator {
        DerivedFieldCalculator::new(EmployeeDefaults {
            default_workplace: "Bandara Soekarno-Hatta".to_string(),
            default_branch: "Cabang Jakarta".to_string(),
        })
    }

    fn new_employee(payload: NewEmployee) -> Employee {
        payload.into_employee(Utc::now())
    }

    fn base_payload() -> NewEmployee {
        NewEmployee {
            employee_number: "GH-0100".to_string(),
            full_name: "Andi Wijaya".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_computes_birth_derived_fields() {
        let mut employee = new_employee(NewEmployee {
            birth_date: Some(date(1971, 4, 8)),
            ..base_payload()
        });

        calculator()
            .prepare_create(&mut employee, date(2025, 5, 1))
            .unwrap();

        assert_eq!(employee.age, Some(54));
        assert_eq!(employee.retirement_date, Some(date(2027, 4, 1)));
    }

    #[test]
    fn test_create_with_work_start_sets_tenure_and_defaults() {
        let mut employee = new_employee(NewEmployee {
            work_start: Some(date(2025, 5, 1)),
            ..base_payload()
        });

        calculator()
            .prepare_create(&mut employee, date(2025, 5, 1))
            .unwrap();

        assert_eq!(employee.tenure.as_deref(), Some(TENURE_BELOW_ONE_MONTH));
        assert_eq!(employee.status, EmploymentStatus::Inactive);
        assert_eq!(employee.workplace.as_deref(), Some("Bandara Soekarno-Hatta"));
        assert_eq!(employee.branch.as_deref(), Some("Cabang Jakarta"));
    }

    #[test]
    fn test_create_keeps_supplied_workplace() {
        let mut employee = new_employee(NewEmployee {
            work_start: Some(date(2024, 1, 1)),
            workplace: Some("Bandara Kualanamu".to_string()),
            ..base_payload()
        });

        calculator()
            .prepare_create(&mut employee, date(2025, 1, 1))
            .unwrap();

        assert_eq!(employee.workplace.as_deref(), Some("Bandara Kualanamu"));
        assert_eq!(employee.branch.as_deref(), Some("Cabang Jakarta"));
    }

    #[test]
    fn test_create_without_work_start_leaves_defaults_unset() {
        let mut employee = new_employee(base_payload());
        calculator()
            .prepare_create(&mut employee, date(2025, 1, 1))
            .unwrap();

        assert!(employee.workplace.is_none());
        assert!(employee.tenure.is_none());
        assert!(employee.retirement_date.is_none());
        assert_eq!(employee.status, EmploymentStatus::Inactive);
    }

    #[test]
    fn test_create_keeps_imported_age_without_birth_date() {
        let mut employee = new_employee(NewEmployee {
            age: Some(41),
            ..base_payload()
        });
        calculator()
            .prepare_create(&mut employee, date(2025, 1, 1))
            .unwrap();
        assert_eq!(employee.age, Some(41));
    }

    #[test]
    fn test_create_keeps_supplied_age_with_birth_date() {
        let mut employee = new_employee(NewEmployee {
            birth_date: Some(date(1971, 4, 8)),
            age: Some(50),
            ..base_payload()
        });
        calculator()
            .prepare_create(&mut employee, date(2025, 5, 1))
            .unwrap();
        assert_eq!(employee.age, Some(50));
        assert_eq!(employee.retirement_date, Some(date(2027, 4, 1)));
    }

    #[test]
    fn test_create_with_future_work_end_is_active() {
        let mut employee = new_employee(NewEmployee {
            work_start: Some(date(2024, 1, 1)),
            work_end: Some(date(2026, 1, 1)),
            ..base_payload()
        });
        calculator()
            .prepare_create(&mut employee, date(2025, 6, 1))
            .unwrap();
        assert_eq!(employee.status, EmploymentStatus::Active);
        assert_eq!(employee.tenure.as_deref(), Some("2 tahun"));
    }

    #[test]
    fn test_create_rejects_work_end_not_after_start() {
        let mut employee = new_employee(NewEmployee {
            work_start: Some(date(2025, 5, 1)),
            work_end: Some(date(2025, 5, 1)),
            ..base_payload()
        });

        let result = calculator().prepare_create(&mut employee, date(2025, 5, 1));
        match result {
            Err(EngineError::InvalidDateRange {
                start_field,
                end_field,
                ..
            }) => {
                assert_eq!(start_field, "work_start");
                assert_eq!(end_field, "work_end");
            }
            other => panic!("Expected InvalidDateRange, got {:?}", other),
        }
    }

    #[test]
    fn test_create_rejects_assignment_end_before_start() {
        let mut employee = new_employee(NewEmployee {
            assignment_start: Some(date(2025, 5, 1)),
            assignment_end: Some(date(2025, 1, 1)),
            ..base_payload()
        });

        let result = calculator().prepare_create(&mut employee, date(2025, 5, 1));
        assert!(matches!(
            result,
            Err(EngineError::InvalidDateRange {
                end_field: "assignment_end",
                ..
            })
        ));
    }

    #[test]
    fn test_create_normalizes_national_id() {
        let mut employee = new_employee(NewEmployee {
            national_id: Some("3171.0123.4567.8901".to_string()),
            ..base_payload()
        });
        calculator()
            .prepare_create(&mut employee, date(2025, 1, 1))
            .unwrap();
        assert_eq!(employee.national_id.as_deref(), Some("3171012345678901"));
    }

    #[test]
    fn test_create_rejects_short_national_id() {
        let mut employee = new_employee(NewEmployee {
            national_id: Some("317101".to_string()),
            ..base_payload()
        });
        let result = calculator().prepare_create(&mut employee, date(2025, 1, 1));
        assert!(matches!(result, Err(EngineError::InvalidEmployee { .. })));
    }

    #[test]
    fn test_blank_national_id_is_cleared() {
        assert_eq!(normalize_national_id("   ").unwrap(), None);
        assert!(normalize_national_id("abc").is_err());
    }

    #[test]
    fn test_update_recomputes_on_birth_date_change() {
        let calc = calculator();
        let mut previous = new_employee(NewEmployee {
            birth_date: Some(date(1980, 1, 5)),
            ..base_payload()
        });
        calc.prepare_create(&mut previous, date(2025, 1, 1)).unwrap();

        let mut updated = previous.clone();
        updated.birth_date = Some(date(1985, 7, 20));
        calc.prepare_update(&previous, &mut updated, date(2025, 1, 1))
            .unwrap();

        assert_eq!(updated.age, Some(39));
        assert_eq!(updated.retirement_date, Some(date(2041, 8, 1)));
    }

    #[test]
    fn test_update_clearing_birth_date_clears_derived_fields() {
        let calc = calculator();
        let mut previous = new_employee(NewEmployee {
            birth_date: Some(date(1980, 1, 5)),
            ..base_payload()
        });
        calc.prepare_create(&mut previous, date(2025, 1, 1)).unwrap();

        let mut updated = previous.clone();
        updated.birth_date = None;
        calc.prepare_update(&previous, &mut updated, date(2025, 1, 1))
            .unwrap();

        assert!(updated.age.is_none());
        assert!(updated.retirement_date.is_none());
    }

    #[test]
    fn test_update_recomputes_tenure_and_status_on_work_end_change() {
        let calc = calculator();
        let mut previous = new_employee(NewEmployee {
            work_start: Some(date(2023, 3, 1)),
            ..base_payload()
        });
        calc.prepare_create(&mut previous, date(2025, 3, 1)).unwrap();
        assert_eq!(previous.status, EmploymentStatus::Inactive);
        assert_eq!(previous.tenure.as_deref(), Some("2 tahun"));

        let mut updated = previous.clone();
        updated.work_end = Some(date(2026, 9, 1));
        calc.prepare_update(&previous, &mut updated, date(2025, 3, 1))
            .unwrap();

        assert_eq!(updated.status, EmploymentStatus::Active);
        assert_eq!(updated.tenure.as_deref(), Some("3 tahun 6 bulan"));
    }

    #[test]
    fn test_update_leaves_tenure_when_dates_unchanged() {
        let calc = calculator();
        let mut previous = new_employee(NewEmployee {
            work_start: Some(date(2023, 3, 1)),
            ..base_payload()
        });
        calc.prepare_create(&mut previous, date(2025, 3, 1)).unwrap();

        let mut updated = previous.clone();
        updated.job_title = Some("Porter".to_string());
        calc.prepare_update(&previous, &mut updated, date(2027, 3, 1))
            .unwrap();

        assert_eq!(updated.tenure.as_deref(), Some("2 tahun"));
    }

    #[test]
    fn test_update_rejects_inverted_work_dates() {
        let calc = calculator();
        let previous = new_employee(base_payload());
        let mut updated = previous.clone();
        updated.work_start = Some(date(2025, 6, 1));
        updated.work_end = Some(date(2025, 1, 1));

        assert!(calc
            .prepare_update(&previous, &mut updated, date(2025, 1, 1))
            .is_err());
    }

    #[test]
    fn test_blank_employee_number_rejected() {
        let mut employee = new_employee(NewEmployee {
            employee_number: "   ".to_string(),
            ..base_payload()
        });

        let result = calculator().prepare_create(&mut employee, date(2025, 1, 1));
        assert!(matches!(
            result,
            Err(EngineError::InvalidEmployee { ref field, .. }) if field == "employee_number"
        ));
    }

    #[test]
    fn test_identifying_fields_are_trimmed() {
        let mut employee = new_employee(NewEmployee {
            employee_number: " GH-0100 ".to_string(),
            ..base_payload()
        });

        calculator()
            .prepare_create(&mut employee, date(2025, 1, 1))
            .unwrap();
        assert_eq!(employee.employee_number, "GH-0100");
    }

    #[test]
    fn test_refresh_tracks_current_date() {
        let calc = calculator();
        let mut employee = new_employee(NewEmployee {
            birth_date: Some(date(1990, 6, 15)),
            work_start: Some(date(2024, 6, 15)),
            work_end: Some(date(2025, 6, 15)),
            ..base_payload()
        });
        calc.prepare_create(&mut employee, date(2024, 6, 15)).unwrap();
        assert_eq!(employee.status, EmploymentStatus::Active);

        calc.refresh(&mut employee, date(2025, 7, 1));
        assert_eq!(employee.age, Some(35));
        assert_eq!(employee.status, EmploymentStatus::Inactive);
        assert_eq!(employee.tenure.as_deref(), Some("1 tahun"));
    }

    #[test]
    fn test_employment_status_boundaries() {
        let end = date(2025, 12, 31);
        assert_eq!(employment_status(Some(end), date(2025, 12, 30)), EmploymentStatus::Active);
        assert_eq!(employment_status(Some(end), end), EmploymentStatus::Active);
        assert_eq!(
            employment_status(Some(end), date(2026, 1, 1)),
            EmploymentStatus::Inactive
        );
    }
}
