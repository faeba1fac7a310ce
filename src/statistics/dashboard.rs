//! Composite dashboard statistics.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::StatisticsConfig;
use crate::models::{Employee, EmploymentStatus, Sex};
use crate::repository::HierarchySnapshot;

use super::count::{CountField, NameCount, group_name, tally};

/// Counts by derived employment status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Contract still running.
    pub active: usize,
    /// Contract ended or no end date.
    pub inactive: usize,
}

/// Temporary-staffing subcategory counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingSummary {
    /// One entry per configured subcategory, in configured order.
    pub subcategories: Vec<NameCount>,
    /// Sum of all subcategory entries.
    pub total: usize,
}

/// Counts by sex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexCounts {
    /// Male.
    pub male: usize,
    /// Female.
    pub female: usize,
    /// Missing or unrecognised.
    pub unspecified: usize,
}

/// Uniform assignment coverage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformCoverage {
    /// Records with a uniform assigned.
    pub assigned: usize,
    /// Records without one.
    pub unassigned: usize,
    /// Share of records with a uniform, in percent, rounded to 2 places.
    pub coverage_percent: Decimal,
}

/// The statistics bundle shown on the dashboard.
///
/// `total`, `active` and `inactive` count records by the soft-delete flag;
/// every breakdown covers active records only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStatistics {
    /// Reference date for the time windows.
    pub as_of: NaiveDate,
    /// All records.
    pub total: usize,
    /// Records not soft-deleted.
    pub active: usize,
    /// Soft-deleted records.
    pub inactive: usize,
    /// By derived employment status.
    pub by_status: StatusCounts,
    /// By employment-status category.
    pub by_employment_type: Vec<NameCount>,
    /// Temporary-staffing breakdown.
    pub staffing: StaffingSummary,
    /// By sex.
    pub by_sex: SexCounts,
    /// Safety shoe type distribution.
    pub shoe_types: Vec<NameCount>,
    /// Uniform coverage.
    pub uniform: UniformCoverage,
    /// By unit code.
    pub by_unit: Vec<NameCount>,
    /// By education level.
    pub by_education: Vec<NameCount>,
    /// Hired within the recent-hire window.
    pub recent_hires: usize,
    /// Retiring within the upcoming-retirement window.
    pub upcoming_retirements: usize,
}

/// Builds dashboard statistics from a snapshot of records.
#[derive(Debug, Clone, Copy)]
pub struct StatisticsAggregator<'a> {
    config: &'a StatisticsConfig,
}

impl<'a> StatisticsAggregator<'a> {
    /// Creates an aggregator using the given windows and labels.
    pub fn new(config: &'a StatisticsConfig) -> Self {
        Self { config }
    }

    /// Computes the full dashboard bundle as of `as_of`.
    pub fn dashboard(
        &self,
        employees: &[Employee],
        hierarchy: &HierarchySnapshot,
        as_of: NaiveDate,
    ) -> DashboardStatistics {
        let current: Vec<&Employee> = employees.iter().filter(|e| e.is_active).collect();
        let by_field = |field: CountField| {
            tally(
                current
                    .iter()
                    .map(|e| group_name(e, field, hierarchy, self.config)),
            )
        };

        DashboardStatistics {
            as_of,
            total: employees.len(),
            active: current.len(),
            inactive: employees.len() - current.len(),
            by_status: status_counts(&current),
            by_employment_type: by_field(CountField::EmploymentType),
            staffing: self.staffing(&current),
            by_sex: sex_counts(&current),
            shoe_types: self.shoe_types(&current),
            uniform: uniform_coverage(&current),
            by_unit: by_field(CountField::Unit),
            by_education: by_field(CountField::Education),
            recent_hires: self.recent_hires(&current, as_of),
            upcoming_retirements: self.upcoming_retirements(&current, as_of),
        }
    }

    fn staffing(&self, employees: &[&Employee]) -> StaffingSummary {
        let subcategories: Vec<NameCount> = self
            .config
            .staffing_subcategories
            .iter()
            .map(|name| NameCount {
                name: name.clone(),
                count: employees
                    .iter()
                    .filter(|e| {
                        e.staffing_subcategory
                            .as_deref()
                            .is_some_and(|value| value.trim().eq_ignore_ascii_case(name.trim()))
                    })
                    .count(),
            })
            .collect();
        let total = subcategories.iter().map(|entry| entry.count).sum();

        StaffingSummary {
            subcategories,
            total,
        }
    }

    fn shoe_types(&self, employees: &[&Employee]) -> Vec<NameCount> {
        tally(employees.iter().map(|e| match e.shoe_type.as_deref() {
            None => self.config.null_label.clone(),
            Some(value) => {
                let value = value.trim();
                if value.is_empty() || value == "-" || value.eq_ignore_ascii_case("unspecified") {
                    self.config.unspecified_label.clone()
                } else {
                    value.to_string()
                }
            }
        }))
    }

    fn recent_hires(&self, employees: &[&Employee], as_of: NaiveDate) -> usize {
        let Some(window_start) = as_of.checked_sub_months(Months::new(self.config.recent_hire_months))
        else {
            return 0;
        };
        employees
            .iter()
            .filter_map(|e| e.hire_date.or(e.work_start))
            .filter(|hired| (window_start..=as_of).contains(hired))
            .count()
    }

    fn upcoming_retirements(&self, employees: &[&Employee], as_of: NaiveDate) -> usize {
        let Some(window_end) =
            as_of.checked_add_months(Months::new(self.config.upcoming_retirement_months))
        else {
            return 0;
        };
        employees
            .iter()
            .filter_map(|e| e.retirement_date)
            .filter(|retires| (as_of..=window_end).contains(retires))
            .count()
    }
}

fn status_counts(employees: &[&Employee]) -> StatusCounts {
    employees
        .iter()
        .fold(StatusCounts::default(), |mut counts, e| {
            match e.status {
                EmploymentStatus::Active => counts.active += 1,
                EmploymentStatus::Inactive => counts.inactive += 1,
            }
            counts
        })
}

fn sex_counts(employees: &[&Employee]) -> SexCounts {
    employees.iter().fold(SexCounts::default(), |mut counts, e| {
        match e.parsed_sex() {
            Some(Sex::Male) => counts.male += 1,
            Some(Sex::Female) => counts.female += 1,
            None => counts.unspecified += 1,
        }
        counts
    })
}

fn uniform_coverage(employees: &[&Employee]) -> UniformCoverage {
    let assigned = employees.iter().filter(|e| e.has_uniform()).count();
    let unassigned = employees.len() - assigned;
    let coverage_percent = if employees.is_empty() {
        Decimal::ZERO
    } else {
        (Decimal::from(assigned) * Decimal::ONE_HUNDRED / Decimal::from(employees.len()))
            .round_dp(2)
    };

    UniformCoverage {
        assigned,
        unassigned,
        coverage_percent,
    }
}
