//! Grouped counts over employee records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::StatisticsConfig;
use crate::models::{Employee, non_blank};
use crate::repository::HierarchySnapshot;

use super::filter::FilterCriteria;

/// A group name with the number of records in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCount {
    /// Group name.
    pub name: String,
    /// Number of records.
    pub count: usize,
}

/// Categorical employee fields that can be grouped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountField {
    /// Unit, by its dashboard label (bare code).
    Unit,
    /// Sub-unit name.
    SubUnit,
    /// Education level, primary falling back to secondary.
    Education,
    /// Job-group category.
    JobGroup,
    /// Employment-status category.
    EmploymentType,
    /// Safety shoe type.
    ShoeType,
    /// Contract provider.
    Provider,
    /// Sex, normalised across encodings.
    Sex,
}

/// Tallies group names into counts sorted by count descending, then name.
///
/// Names are grouped trimmed and case-insensitively; each group reports the
/// first spelling seen.
pub(crate) fn tally<I>(names: I) -> Vec<NameCount>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, NameCount> = HashMap::new();
    for name in names {
        let name = name.trim();
        counts
            .entry(name.to_lowercase())
            .or_insert_with(|| NameCount {
                name: name.to_string(),
                count: 0,
            })
            .count += 1;
    }

    let mut result: Vec<NameCount> = counts.into_values().collect();
    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    result
}

/// Returns the group name of `employee` for `field`.
///
/// Records without a value land in the null bucket, so every record belongs
/// to exactly one group.
pub(crate) fn group_name(
    employee: &Employee,
    field: CountField,
    hierarchy: &HierarchySnapshot,
    config: &StatisticsConfig,
) -> String {
    let value = match field {
        CountField::Unit => employee
            .unit_id
            .and_then(|id| hierarchy.unit(id))
            .and_then(|unit| non_blank(Some(unit.code.as_str())))
            .map(str::to_string),
        CountField::SubUnit => employee
            .sub_unit_id
            .and_then(|id| hierarchy.sub_unit(id))
            .and_then(|sub_unit| non_blank(Some(sub_unit.name.as_str())))
            .map(str::to_string),
        CountField::Education => employee.education_level().map(str::to_string),
        CountField::JobGroup => non_blank(employee.job_group.as_deref()).map(str::to_string),
        CountField::EmploymentType => {
            non_blank(employee.employment_type.as_deref()).map(str::to_string)
        }
        CountField::ShoeType => non_blank(employee.shoe_type.as_deref()).map(str::to_string),
        CountField::Provider => non_blank(employee.provider.as_deref()).map(str::to_string),
        CountField::Sex => match non_blank(employee.sex.as_deref()) {
            None => None,
            Some(_) => Some(
                employee
                    .parsed_sex()
                    .map(|sex| sex.label().to_string())
                    .unwrap_or_else(|| config.unspecified_label.clone()),
            ),
        },
    };

    value.unwrap_or_else(|| config.null_label.clone())
}

/// Counts matching records grouped by `field`.
///
/// The result is sorted by count descending (ties by name), and the counts
/// always sum to the number of records matching `criteria`.
pub fn count_by<'a, I>(
    employees: I,
    field: CountField,
    criteria: &FilterCriteria,
    hierarchy: &HierarchySnapshot,
    config: &StatisticsConfig,
) -> Vec<NameCount>
where
    I: IntoIterator<Item = &'a Employee>,
{
    tally(
        employees
            .into_iter()
            .filter(|employee| criteria.matches(employee))
            .map(|employee| group_name(employee, field, hierarchy, config)),
    )
}
