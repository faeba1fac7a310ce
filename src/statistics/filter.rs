//! Typed filter criteria for statistics and listings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Employee, Sex, non_blank};

/// Optional predicates over employee records.
///
/// Every field that is set must match. Soft-deleted records are excluded
/// unless `include_inactive` is true.
///
/// # Example
///
/// ```
/// use personnel_engine::statistics::FilterCriteria;
///
/// let criteria = FilterCriteria {
///     job_group: Some("Operasional".to_string()),
///     ..Default::default()
/// };
/// assert!(!criteria.include_inactive);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Unit reference.
    pub unit_id: Option<Uuid>,
    /// Sub-unit reference.
    pub sub_unit_id: Option<Uuid>,
    /// Employment-status category.
    pub employment_type: Option<String>,
    /// Job-group category.
    pub job_group: Option<String>,
    /// Contract provider.
    pub provider: Option<String>,
    /// Sex, in either encoding.
    pub sex: Option<String>,
    /// Education level (primary, falling back to secondary).
    pub education: Option<String>,
    /// Include soft-deleted records.
    pub include_inactive: bool,
}

fn same_text(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match non_blank(wanted) {
        None => true,
        Some(wanted) => non_blank(actual).is_some_and(|actual| actual.eq_ignore_ascii_case(wanted)),
    }
}

impl FilterCriteria {
    /// Returns true if the record satisfies every set predicate.
    pub fn matches(&self, employee: &Employee) -> bool {
        if !self.include_inactive && !employee.is_active {
            return false;
        }
        if self.unit_id.is_some_and(|id| employee.unit_id != Some(id)) {
            return false;
        }
        if self
            .sub_unit_id
            .is_some_and(|id| employee.sub_unit_id != Some(id))
        {
            return false;
        }
        if let Some(sex) = non_blank(self.sex.as_deref()) {
            let wanted = Sex::parse(sex);
            if wanted.is_none() || wanted != employee.parsed_sex() {
                return false;
            }
        }

        same_text(
            self.employment_type.as_deref(),
            employee.employment_type.as_deref(),
        ) && same_text(self.job_group.as_deref(), employee.job_group.as_deref())
            && same_text(self.provider.as_deref(), employee.provider.as_deref())
            && same_text(self.education.as_deref(), employee.education_level())
    }
}
