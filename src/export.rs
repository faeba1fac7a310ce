//! CSV export of employee records.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::EngineResult;
use crate::service::EmployeeView;

const HEADERS: [&str; 17] = [
    "employee_number",
    "national_id",
    "full_name",
    "sex",
    "birth_date",
    "age",
    "unit",
    "sub_unit",
    "structure",
    "job_title",
    "employment_type",
    "job_group",
    "provider",
    "status",
    "work_start",
    "tenure",
    "retirement_date",
];

#[derive(Serialize)]
struct ExportRow<'a> {
    employee_number: &'a str,
    national_id: Option<&'a str>,
    full_name: &'a str,
    sex: Option<&'a str>,
    birth_date: Option<NaiveDate>,
    age: Option<u32>,
    unit: Option<&'a str>,
    sub_unit: Option<&'a str>,
    structure: &'a str,
    job_title: Option<&'a str>,
    employment_type: Option<&'a str>,
    job_group: Option<&'a str>,
    provider: Option<&'a str>,
    status: &'static str,
    work_start: Option<NaiveDate>,
    tenure: Option<&'a str>,
    retirement_date: Option<NaiveDate>,
}

impl<'a> From<&'a EmployeeView> for ExportRow<'a> {
    fn from(view: &'a EmployeeView) -> Self {
        let employee = &view.employee;
        Self {
            employee_number: &employee.employee_number,
            national_id: employee.national_id.as_deref(),
            full_name: &employee.full_name,
            sex: employee
                .parsed_sex()
                .map(|sex| sex.label())
                .or(employee.sex.as_deref()),
            birth_date: employee.birth_date,
            age: employee.age,
            unit: view.unit_label.as_deref(),
            sub_unit: view.sub_unit_name.as_deref(),
            structure: &view.structure_label,
            job_title: employee.job_title.as_deref(),
            employment_type: employee.employment_type.as_deref(),
            job_group: employee.job_group.as_deref(),
            provider: employee.provider.as_deref(),
            status: employee.status.label(),
            work_start: employee.work_start,
            tenure: employee.tenure.as_deref(),
            retirement_date: employee.retirement_date,
        }
    }
}

/// Writes one header row and one row per record.
///
/// The header is written even when there are no records.
pub fn write_employees_csv<W: Write>(writer: W, views: &[EmployeeView]) -> EngineResult<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv.write_record(HEADERS)?;
    for view in views {
        csv.serialize(ExportRow::from(view))?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}
