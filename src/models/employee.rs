//! Employee model and related types.
//!
//! This module defines the [`Employee`] record together with the create and
//! update payloads that feed the derived-field pipeline.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Derived employment status of an employee.
///
/// An employee is [`EmploymentStatus::Active`] while the current date is on or
/// before their work-end date. Records without a work-end date are inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// The employment contract is still running.
    Active,
    /// The contract has ended, or no end date is known.
    #[default]
    Inactive,
}

impl EmploymentStatus {
    /// Returns the display label used in reports and exports.
    pub fn label(self) -> &'static str {
        match self {
            EmploymentStatus::Active => "Aktif",
            EmploymentStatus::Inactive => "Tidak Aktif",
        }
    }
}

/// Sex of an employee, parsed from the encodings found in stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (`L`, `M`, `Laki-laki`, `Male`).
    Male,
    /// Female (`P`, `F`, `Perempuan`, `Female`).
    Female,
}

impl Sex {
    /// Parses both the single-letter and the full-word encodings.
    ///
    /// # Examples
    ///
    /// ```
    /// use personnel_engine::models::Sex;
    ///
    /// assert_eq!(Sex::parse("L"), Some(Sex::Male));
    /// assert_eq!(Sex::parse("perempuan"), Some(Sex::Female));
    /// assert_eq!(Sex::parse("?"), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "l" | "m" | "laki-laki" | "laki laki" | "pria" | "male" => Some(Sex::Male),
            "p" | "f" | "perempuan" | "wanita" | "female" => Some(Sex::Female),
            _ => None,
        }
    }

    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Laki-laki",
            Sex::Female => "Perempuan",
        }
    }
}

/// Represents an employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Internal identifier.
    pub id: Uuid,
    /// National identity number, digits only (16 digits when set).
    pub national_id: Option<String>,
    /// Company employee number.
    pub employee_number: String,
    /// Full name.
    pub full_name: String,
    /// Sex as stored (single-letter or full-word encoding).
    pub sex: Option<String>,
    /// Date of birth.
    pub birth_date: Option<NaiveDate>,
    /// Place of birth.
    pub birth_place: Option<String>,
    /// Current domicile.
    pub domicile: Option<String>,
    /// Date the employee was hired.
    pub hire_date: Option<NaiveDate>,
    /// Job title.
    pub job_title: Option<String>,
    /// Employment-status category (e.g. "PEGAWAI TETAP", "PKWT", "TAD").
    pub employment_type: Option<String>,
    /// Job-group category.
    pub job_group: Option<String>,
    /// Temporary-staffing subcategory (e.g. "TAD PAKET SDM").
    pub staffing_subcategory: Option<String>,
    /// Unit the employee belongs to.
    pub unit_id: Option<Uuid>,
    /// Sub-unit the employee belongs to.
    pub sub_unit_id: Option<Uuid>,
    /// Short organisational-unit code stored directly on the record.
    pub organizational_unit: Option<String>,
    /// Historical organisation name from imported records.
    pub legacy_organization: Option<String>,
    /// Historical unit long name from imported records.
    pub legacy_unit_name: Option<String>,
    /// Contract provider for outsourced staff.
    pub provider: Option<String>,
    /// Pay grade.
    pub pay_grade: Option<String>,
    /// Primary education level.
    pub education: Option<String>,
    /// Secondary education field, used when the primary one is empty.
    pub education_secondary: Option<String>,
    /// Start of the current employment contract.
    pub work_start: Option<NaiveDate>,
    /// End of the current employment contract.
    pub work_end: Option<NaiveDate>,
    /// Start of the current assignment.
    pub assignment_start: Option<NaiveDate>,
    /// End of the current assignment.
    pub assignment_end: Option<NaiveDate>,
    /// Workplace.
    pub workplace: Option<String>,
    /// Branch office.
    pub branch: Option<String>,
    /// Safety shoe type.
    pub shoe_type: Option<String>,
    /// Safety shoe size.
    pub shoe_size: Option<String>,
    /// Uniform size; present once a uniform has been assigned.
    pub uniform_size: Option<String>,
    /// Age in whole years (derived).
    pub age: Option<u32>,
    /// Tenure description (derived).
    pub tenure: Option<String>,
    /// Retirement date (derived).
    pub retirement_date: Option<NaiveDate>,
    /// Employment status (derived).
    pub status: EmploymentStatus,
    /// False once the record has been soft-deleted.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Returns the education level, falling back to the secondary field.
    ///
    /// Blank values count as absent.
    pub fn education_level(&self) -> Option<&str> {
        non_blank(self.education.as_deref()).or_else(|| non_blank(self.education_secondary.as_deref()))
    }

    /// Returns the parsed sex, if the stored value is recognised.
    pub fn parsed_sex(&self) -> Option<Sex> {
        self.sex.as_deref().and_then(Sex::parse)
    }

    /// Returns true if a uniform has been assigned.
    pub fn has_uniform(&self) -> bool {
        non_blank(self.uniform_size.as_deref()).is_some()
    }
}

/// Returns the trimmed value unless it is empty.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Payload for creating an employee.
///
/// Derived fields are absent on purpose: they are computed by the
/// before-persist pipeline. `age` may be supplied for imported records that
/// carry no birth date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewEmployee {
    /// National identity number.
    pub national_id: Option<String>,
    /// Company employee number.
    pub employee_number: String,
    /// Full name.
    pub full_name: String,
    /// Sex.
    pub sex: Option<String>,
    /// Date of birth.
    pub birth_date: Option<NaiveDate>,
    /// Place of birth.
    pub birth_place: Option<String>,
    /// Current domicile.
    pub domicile: Option<String>,
    /// Hire date.
    pub hire_date: Option<NaiveDate>,
    /// Job title.
    pub job_title: Option<String>,
    /// Employment-status category.
    pub employment_type: Option<String>,
    /// Job-group category.
    pub job_group: Option<String>,
    /// Temporary-staffing subcategory.
    pub staffing_subcategory: Option<String>,
    /// Unit reference.
    pub unit_id: Option<Uuid>,
    /// Sub-unit reference.
    pub sub_unit_id: Option<Uuid>,
    /// Short organisational-unit code.
    pub organizational_unit: Option<String>,
    /// Historical organisation name.
    pub legacy_organization: Option<String>,
    /// Historical unit long name.
    pub legacy_unit_name: Option<String>,
    /// Contract provider.
    pub provider: Option<String>,
    /// Pay grade.
    pub pay_grade: Option<String>,
    /// Primary education level.
    pub education: Option<String>,
    /// Secondary education field.
    pub education_secondary: Option<String>,
    /// Contract start.
    pub work_start: Option<NaiveDate>,
    /// Contract end.
    pub work_end: Option<NaiveDate>,
    /// Assignment start.
    pub assignment_start: Option<NaiveDate>,
    /// Assignment end.
    pub assignment_end: Option<NaiveDate>,
    /// Workplace.
    pub workplace: Option<String>,
    /// Branch office.
    pub branch: Option<String>,
    /// Safety shoe type.
    pub shoe_type: Option<String>,
    /// Safety shoe size.
    pub shoe_size: Option<String>,
    /// Uniform size.
    pub uniform_size: Option<String>,
    /// Age for records imported without a birth date.
    pub age: Option<u32>,
}

impl NewEmployee {
    /// Builds an unsaved [`Employee`] with a fresh id and timestamps.
    pub fn into_employee(self, now: DateTime<Utc>) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            national_id: self.national_id,
            employee_number: self.employee_number,
            full_name: self.full_name,
            sex: self.sex,
            birth_date: self.birth_date,
            birth_place: self.birth_place,
            domicile: self.domicile,
            hire_date: self.hire_date,
            job_title: self.job_title,
            employment_type: self.employment_type,
            job_group: self.job_group,
            staffing_subcategory: self.staffing_subcategory,
            unit_id: self.unit_id,
            sub_unit_id: self.sub_unit_id,
            organizational_unit: self.organizational_unit,
            legacy_organization: self.legacy_organization,
            legacy_unit_name: self.legacy_unit_name,
            provider: self.provider,
            pay_grade: self.pay_grade,
            education: self.education,
            education_secondary: self.education_secondary,
            work_start: self.work_start,
            work_end: self.work_end,
            assignment_start: self.assignment_start,
            assignment_end: self.assignment_end,
            workplace: self.workplace,
            branch: self.branch,
            shoe_type: self.shoe_type,
            shoe_size: self.shoe_size,
            uniform_size: self.uniform_size,
            age: self.age,
            tenure: None,
            retirement_date: None,
            status: EmploymentStatus::Inactive,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Deserializes a present field as `Some(value)`, so that together with
/// `#[serde(default)]` an absent field stays `None` and an explicit `null`
/// becomes `Some(None)`.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Partial update of an employee.
///
/// Each outer `None` leaves the field untouched. For nullable fields the inner
/// `None` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmployeeUpdate {
    /// National identity number.
    #[serde(deserialize_with = "deserialize_some")]
    pub national_id: Option<Option<String>>,
    /// Company employee number.
    pub employee_number: Option<String>,
    /// Full name.
    pub full_name: Option<String>,
    /// Sex.
    #[serde(deserialize_with = "deserialize_some")]
    pub sex: Option<Option<String>>,
    /// Date of birth.
    #[serde(deserialize_with = "deserialize_some")]
    pub birth_date: Option<Option<NaiveDate>>,
    /// Place of birth.
    #[serde(deserialize_with = "deserialize_some")]
    pub birth_place: Option<Option<String>>,
    /// Domicile.
    #[serde(deserialize_with = "deserialize_some")]
    pub domicile: Option<Option<String>>,
    /// Hire date.
    #[serde(deserialize_with = "deserialize_some")]
    pub hire_date: Option<Option<NaiveDate>>,
    /// Job title.
    #[serde(deserialize_with = "deserialize_some")]
    pub job_title: Option<Option<String>>,
    /// Employment-status category.
    #[serde(deserialize_with = "deserialize_some")]
    pub employment_type: Option<Option<String>>,
    /// Job-group category.
    #[serde(deserialize_with = "deserialize_some")]
    pub job_group: Option<Option<String>>,
    /// Temporary-staffing subcategory.
    #[serde(deserialize_with = "deserialize_some")]
    pub staffing_subcategory: Option<Option<String>>,
    /// Unit reference.
    #[serde(deserialize_with = "deserialize_some")]
    pub unit_id: Option<Option<Uuid>>,
    /// Sub-unit reference.
    #[serde(deserialize_with = "deserialize_some")]
    pub sub_unit_id: Option<Option<Uuid>>,
    /// Short organisational-unit code.
    #[serde(deserialize_with = "deserialize_some")]
    pub organizational_unit: Option<Option<String>>,
    /// Historical organisation name.
    #[serde(deserialize_with = "deserialize_some")]
    pub legacy_organization: Option<Option<String>>,
    /// Historical unit long name.
    #[serde(deserialize_with = "deserialize_some")]
    pub legacy_unit_name: Option<Option<String>>,
    /// Contract provider.
    #[serde(deserialize_with = "deserialize_some")]
    pub provider: Option<Option<String>>,
    /// Pay grade.
    #[serde(deserialize_with = "deserialize_some")]
    pub pay_grade: Option<Option<String>>,
    /// Primary education level.
    #[serde(deserialize_with = "deserialize_some")]
    pub education: Option<Option<String>>,
    /// Secondary education field.
    #[serde(deserialize_with = "deserialize_some")]
    pub education_secondary: Option<Option<String>>,
    /// Contract start.
    #[serde(deserialize_with = "deserialize_some")]
    pub work_start: Option<Option<NaiveDate>>,
    /// Contract end.
    #[serde(deserialize_with = "deserialize_some")]
    pub work_end: Option<Option<NaiveDate>>,
    /// Assignment start.
    #[serde(deserialize_with = "deserialize_some")]
    pub assignment_start: Option<Option<NaiveDate>>,
    /// Assignment end.
    #[serde(deserialize_with = "deserialize_some")]
    pub assignment_end: Option<Option<NaiveDate>>,
    /// Workplace.
    #[serde(deserialize_with = "deserialize_some")]
    pub workplace: Option<Option<String>>,
    /// Branch office.
    #[serde(deserialize_with = "deserialize_some")]
    pub branch: Option<Option<String>>,
    /// Safety shoe type.
    #[serde(deserialize_with = "deserialize_some")]
    pub shoe_type: Option<Option<String>>,
    /// Safety shoe size.
    #[serde(deserialize_with = "deserialize_some")]
    pub shoe_size: Option<Option<String>>,
    /// Uniform size.
    #[serde(deserialize_with = "deserialize_some")]
    pub uniform_size: Option<Option<String>>,
}

macro_rules! apply_fields {
    ($update:expr, $target:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $update.$field {
                $target.$field = value;
            }
        )+
    };
}

impl EmployeeUpdate {
    /// Applies the update onto a copy of `employee`, leaving derived fields alone.
    pub fn apply_to(self, employee: &Employee) -> Employee {
        let mut updated = employee.clone();
        apply_fields!(
            self,
            updated,
            national_id,
            employee_number,
            full_name,
            sex,
            birth_date,
            birth_place,
            domicile,
            hire_date,
            job_title,
            employment_type,
            job_group,
            staffing_subcategory,
            unit_id,
            sub_unit_id,
            organizational_unit,
            legacy_organization,
            legacy_unit_name,
            provider,
            pay_grade,
            education,
            education_secondary,
            work_start,
            work_end,
            assignment_start,
            assignment_end,
            workplace,
            branch,
            shoe_type,
            shoe_size,
            uniform_size,
        );
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_employee() -> Employee {
        NewEmployee {
            employee_number: "GH-0001".to_string(),
            full_name: "Budi Santoso".to_string(),
            birth_date: Some(date(1987, 9, 5)),
            work_start: Some(date(2020, 1, 1)),
            ..Default::default()
        }
        .into_employee(Utc::now())
    }

    #[test]
    fn test_deserialize_new_employee_with_missing_fields() {
        let json = r#"{
            "employee_number": "GH-0002",
            "full_name": "Siti Rahma",
            "sex": "P",
            "birth_date": "1990-02-14"
        }"#;

        let payload: NewEmployee = serde_json::from_str(json).unwrap();
        assert_eq!(payload.employee_number, "GH-0002");
        assert_eq!(payload.birth_date, Some(date(1990, 2, 14)));
        assert!(payload.work_start.is_none());
        assert!(payload.unit_id.is_none());
    }

    #[test]
    fn test_new_employee_starts_active_record_with_inactive_status() {
        let employee = create_test_employee();
        assert!(employee.is_active);
        assert_eq!(employee.status, EmploymentStatus::Inactive);
        assert!(employee.retirement_date.is_none());
        assert_eq!(employee.created_at, employee.updated_at);
    }

    #[test]
    fn test_update_distinguishes_absent_from_null() {
        let json = r#"{ "full_name": "Budi S.", "work_start": null }"#;
        let update: EmployeeUpdate = serde_json::from_str(json).unwrap();

        assert_eq!(update.full_name, Some("Budi S.".to_string()));
        assert_eq!(update.work_start, Some(None));
        assert_eq!(update.birth_date, None);

        let employee = create_test_employee();
        let updated = update.apply_to(&employee);
        assert_eq!(updated.full_name, "Budi S.");
        assert_eq!(updated.work_start, None);
        assert_eq!(updated.birth_date, Some(date(1987, 9, 5)));
    }

    #[test]
    fn test_update_sets_new_value() {
        let json = r#"{ "work_end": "2026-12-31" }"#;
        let update: EmployeeUpdate = serde_json::from_str(json).unwrap();
        let updated = update.apply_to(&create_test_employee());
        assert_eq!(updated.work_end, Some(date(2026, 12, 31)));
    }

    #[test]
    fn test_update_sets_legacy_placement_and_secondary_education() {
        let json = r#"{
            "education_secondary": "D3",
            "legacy_organization": "Operasi Darat",
            "legacy_unit_name": "Ramp Service"
        }"#;
        let update: EmployeeUpdate = serde_json::from_str(json).unwrap();
        let updated = update.apply_to(&create_test_employee());

        assert_eq!(updated.education_secondary.as_deref(), Some("D3"));
        assert_eq!(updated.legacy_organization.as_deref(), Some("Operasi Darat"));
        assert_eq!(updated.legacy_unit_name.as_deref(), Some("Ramp Service"));

        let cleared: EmployeeUpdate =
            serde_json::from_str(r#"{ "legacy_organization": null }"#).unwrap();
        assert_eq!(cleared.apply_to(&updated).legacy_organization, None);
    }

    #[test]
    fn test_sex_parse_accepts_both_encodings() {
        assert_eq!(Sex::parse("L"), Some(Sex::Male));
        assert_eq!(Sex::parse("Laki-laki"), Some(Sex::Male));
        assert_eq!(Sex::parse(" male "), Some(Sex::Male));
        assert_eq!(Sex::parse("P"), Some(Sex::Female));
        assert_eq!(Sex::parse("Perempuan"), Some(Sex::Female));
        assert_eq!(Sex::parse("F"), Some(Sex::Female));
        assert_eq!(Sex::parse(""), None);
    }

    #[test]
    fn test_education_level_falls_back_to_secondary() {
        let mut employee = create_test_employee();
        employee.education_secondary = Some("D3".to_string());
        assert_eq!(employee.education_level(), Some("D3"));

        employee.education = Some("  ".to_string());
        assert_eq!(employee.education_level(), Some("D3"));

        employee.education = Some("S1".to_string());
        assert_eq!(employee.education_level(), Some("S1"));
    }

    #[test]
    fn test_has_uniform_ignores_blank_size() {
        let mut employee = create_test_employee();
        assert!(!employee.has_uniform());
        employee.uniform_size = Some(" ".to_string());
        assert!(!employee.has_uniform());
        employee.uniform_size = Some("L".to_string());
        assert!(employee.has_uniform());
    }

    #[test]
    fn test_employment_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EmploymentStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&EmploymentStatus::Inactive).unwrap(),
            "\"inactive\""
        );
        assert_eq!(EmploymentStatus::Active.label(), "Aktif");
    }
}
