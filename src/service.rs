//! Employee service.
//!
//! [`EmployeeService`] is the write boundary for employee records: every
//! create and update passes through the [`DerivedFieldCalculator`] before it
//! reaches the repository, and every successful write emits an audit event.

use std::io::Write;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::DerivedFieldCalculator;
use crate::config::{ConfigLoader, StatisticsConfig};
use crate::error::{EngineError, EngineResult};
use crate::export::write_employees_csv;
use crate::formatting::HierarchyFormatter;
use crate::models::{Employee, EmployeeUpdate, NewEmployee, SubUnit, Unit};
use crate::repository::{EmployeeRepository, HierarchyIssue, HierarchySnapshot, UnitRegistry};
use crate::statistics::{
    CountField, DashboardStatistics, FilterCriteria, NameCount, StatisticsAggregator, count_by,
};

/// An employee record together with its resolved placement labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeView {
    /// The stored record.
    #[serde(flatten)]
    pub employee: Employee,
    /// Unit code as shown on dashboards.
    pub unit_label: Option<String>,
    /// Unit label as shown on forms.
    pub unit_form_label: Option<String>,
    /// Sub-unit name.
    pub sub_unit_name: Option<String>,
    /// Resolved organisational-unit label.
    pub organizational_unit_label: String,
    /// Full placement line.
    pub structure_label: String,
}

/// A unit with its labels and sub-units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitView {
    /// The stored unit.
    #[serde(flatten)]
    pub unit: Unit,
    /// Bare code.
    pub dashboard_label: String,
    /// `"(code) Long Name"` or bare code.
    pub form_label: String,
    /// Sub-units of this unit.
    pub sub_units: Vec<SubUnit>,
}

/// Coordinates record writes, reads, and reports.
#[derive(Debug)]
pub struct EmployeeService<R> {
    repository: R,
    units: UnitRegistry,
    calculator: DerivedFieldCalculator,
    formatter: HierarchyFormatter,
    statistics: StatisticsConfig,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service from its collaborators.
    pub fn new(
        repository: R,
        units: UnitRegistry,
        calculator: DerivedFieldCalculator,
        formatter: HierarchyFormatter,
        statistics: StatisticsConfig,
    ) -> Self {
        Self {
            repository,
            units,
            calculator,
            formatter,
            statistics,
        }
    }

    /// Creates a service wired from loaded configuration.
    pub fn from_config(repository: R, config: &ConfigLoader) -> Self {
        Self::new(
            repository,
            UnitRegistry::from_seed(config.structure()),
            DerivedFieldCalculator::new(config.employee_defaults().clone()),
            HierarchyFormatter::new(config.directory().clone()),
            config.statistics().clone(),
        )
    }

    /// Returns the unit registry.
    pub fn units(&self) -> &UnitRegistry {
        &self.units
    }

    /// Returns the hierarchy formatter.
    pub fn formatter(&self) -> &HierarchyFormatter {
        &self.formatter
    }

    /// Creates a record.
    pub fn create(&self, payload: NewEmployee, today: NaiveDate) -> EngineResult<Employee> {
        let mut employee = payload.into_employee(Utc::now());
        self.check_placement(&employee)?;
        self.calculator.prepare_create(&mut employee, today)?;

        let saved = self.repository.insert(employee)?;
        audit("create", &saved);
        Ok(saved)
    }

    /// Applies a partial update to a record.
    pub fn update(
        &self,
        id: Uuid,
        changes: EmployeeUpdate,
        today: NaiveDate,
    ) -> EngineResult<Employee> {
        let previous = self.repository.get(id)?;
        let mut employee = changes.apply_to(&previous);
        self.check_placement(&employee)?;
        self.calculator
            .prepare_update(&previous, &mut employee, today)?;
        employee.updated_at = Utc::now();

        let saved = self.repository.update(employee)?;
        audit("update", &saved);
        Ok(saved)
    }

    /// Soft-deletes a record.
    pub fn deactivate(&self, id: Uuid) -> EngineResult<Employee> {
        let mut employee = self.repository.get(id)?;
        employee.is_active = false;
        employee.updated_at = Utc::now();

        let saved = self.repository.update(employee)?;
        audit("deactivate", &saved);
        Ok(saved)
    }

    /// Fetches a record with its calendar-relative fields refreshed.
    pub fn get(&self, id: Uuid, today: NaiveDate) -> EngineResult<Employee> {
        let mut employee = self.repository.get(id)?;
        self.calculator.refresh(&mut employee, today);
        Ok(employee)
    }

    /// Lists matching records with their calendar-relative fields refreshed.
    pub fn list(&self, criteria: &FilterCriteria, today: NaiveDate) -> EngineResult<Vec<Employee>> {
        Ok(self
            .repository
            .list()?
            .into_iter()
            .filter(|employee| criteria.matches(employee))
            .map(|mut employee| {
                self.calculator.refresh(&mut employee, today);
                employee
            })
            .collect())
    }

    /// Attaches placement labels to a record.
    pub fn view(&self, employee: Employee) -> EngineResult<EmployeeView> {
        let hierarchy = self.units.snapshot()?;
        Ok(self.view_with(&hierarchy, employee))
    }

    /// Attaches placement labels to several records.
    pub fn views(&self, employees: Vec<Employee>) -> EngineResult<Vec<EmployeeView>> {
        let hierarchy = self.units.snapshot()?;
        Ok(employees
            .into_iter()
            .map(|employee| self.view_with(&hierarchy, employee))
            .collect())
    }

    fn view_with(&self, hierarchy: &HierarchySnapshot, employee: Employee) -> EmployeeView {
        let unit = employee.unit_id.and_then(|id| hierarchy.unit(id));
        let sub_unit = employee.sub_unit_id.and_then(|id| hierarchy.sub_unit(id));

        EmployeeView {
            unit_label: unit.map(|u| self.formatter.dashboard_label(u)),
            unit_form_label: unit.map(|u| self.formatter.form_label(u)),
            sub_unit_name: sub_unit.map(|s| s.name.clone()),
            organizational_unit_label: self.formatter.organizational_unit_label(&employee),
            structure_label: self.formatter.full_structure_label(&employee, unit, sub_unit),
            employee,
        }
    }

    /// Units with their labels, ordered by code.
    pub fn unit_views(&self) -> EngineResult<Vec<UnitView>> {
        let hierarchy = self.units.snapshot()?;
        let mut views: Vec<UnitView> = hierarchy
            .units()
            .iter()
            .map(|unit| UnitView {
                dashboard_label: self.formatter.dashboard_label(unit),
                form_label: self.formatter.form_label(unit),
                sub_units: hierarchy.sub_units_of(unit.id).cloned().collect(),
                unit: unit.clone(),
            })
            .collect();
        views.sort_by(|a, b| a.unit.code.cmp(&b.unit.code));
        Ok(views)
    }

    /// Consistency problems in the organisational hierarchy.
    pub fn hierarchy_issues(&self) -> EngineResult<Vec<HierarchyIssue>> {
        Ok(self.units.snapshot()?.issues(self.formatter.directory()))
    }

    /// Grouped counts of matching records.
    pub fn count_by(&self, field: CountField, criteria: &FilterCriteria) -> EngineResult<Vec<NameCount>> {
        let employees = self.repository.list()?;
        let hierarchy = self.units.snapshot()?;
        Ok(count_by(
            &employees,
            field,
            criteria,
            &hierarchy,
            &self.statistics,
        ))
    }

    /// The dashboard statistics bundle.
    pub fn dashboard(&self, as_of: NaiveDate) -> EngineResult<DashboardStatistics> {
        let mut employees = self.repository.list()?;
        for employee in &mut employees {
            self.calculator.refresh(employee, as_of);
        }
        let hierarchy = self.units.snapshot()?;
        Ok(StatisticsAggregator::new(&self.statistics).dashboard(&employees, &hierarchy, as_of))
    }

    /// Writes matching records as CSV.
    pub fn export_csv<W: Write>(
        &self,
        writer: W,
        criteria: &FilterCriteria,
        today: NaiveDate,
    ) -> EngineResult<usize> {
        let views = self.views(self.list(criteria, today)?)?;
        write_employees_csv(writer, &views)?;
        info!(rows = views.len(), "Exported employee records");
        Ok(views.len())
    }

    fn check_placement(&self, employee: &Employee) -> EngineResult<()> {
        let hierarchy = self.units.snapshot()?;

        if let Some(unit_id) = employee.unit_id {
            if hierarchy.unit(unit_id).is_none() {
                warn!(employee_number = %employee.employee_number, %unit_id, "Unknown unit");
                return Err(EngineError::InvalidEmployee {
                    field: "unit_id".to_string(),
                    message: format!("unit {} does not exist", unit_id),
                });
            }
        }

        if let Some(sub_unit_id) = employee.sub_unit_id {
            let sub_unit = hierarchy.sub_unit(sub_unit_id).ok_or_else(|| {
                EngineError::InvalidEmployee {
                    field: "sub_unit_id".to_string(),
                    message: format!("sub-unit {} does not exist", sub_unit_id),
                }
            })?;
            if employee.unit_id.is_some_and(|unit_id| unit_id != sub_unit.unit_id) {
                return Err(EngineError::InvalidEmployee {
                    field: "sub_unit_id".to_string(),
                    message: format!("sub-unit {} belongs to another unit", sub_unit_id),
                });
            }
        }

        Ok(())
    }
}

fn audit(action: &'static str, employee: &Employee) {
    info!(
        target: "audit",
        action,
        employee_id = %employee.id,
        employee_number = %employee.employee_number,
        age = ?employee.age,
        tenure = ?employee.tenure,
        retirement_date = ?employee.retirement_date,
        status = ?employee.status,
        is_active = employee.is_active,
        timestamp = %employee.updated_at,
        "Employee record written"
    );
}
