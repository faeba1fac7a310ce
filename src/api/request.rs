//! Query types for the Personnel Engine API.
//!
//! Request bodies reuse the model payloads ([`crate::models::NewEmployee`],
//! [`crate::models::EmployeeUpdate`]); this module covers query strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::statistics::{CountField, FilterCriteria};

/// Query for endpoints that accept a reference date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AsOfQuery {
    /// Reference date; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Query for the `/statistics/count` endpoint.
///
/// The filter fields are spelled out rather than flattened so that the
/// query-string deserializer can parse the non-string ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountQuery {
    /// Field to group on.
    pub field: CountField,
    /// Unit reference.
    #[serde(default)]
    pub unit_id: Option<Uuid>,
    /// Sub-unit reference.
    #[serde(default)]
    pub sub_unit_id: Option<Uuid>,
    /// Employment-status category.
    #[serde(default)]
    pub employment_type: Option<String>,
    /// Job-group category.
    #[serde(default)]
    pub job_group: Option<String>,
    /// Contract provider.
    #[serde(default)]
    pub provider: Option<String>,
    /// Sex, in either encoding.
    #[serde(default)]
    pub sex: Option<String>,
    /// Education level.
    #[serde(default)]
    pub education: Option<String>,
    /// Include soft-deleted records.
    #[serde(default)]
    pub include_inactive: bool,
}

impl CountQuery {
    /// Splits the query into the grouping field and the filter.
    pub fn into_parts(self) -> (CountField, FilterCriteria) {
        (
            self.field,
            FilterCriteria {
                unit_id: self.unit_id,
                sub_unit_id: self.sub_unit_id,
                employment_type: self.employment_type,
                job_group: self.job_group,
                provider: self.provider,
                sex: self.sex,
                education: self.education,
                include_inactive: self.include_inactive,
            },
        )
    }
}
