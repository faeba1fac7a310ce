//! Configuration types for the personnel engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::BTreeMap;

fn default_not_available() -> String {
    "-".to_string()
}

fn default_separator() -> String {
    " - ".to_string()
}

/// Lookup data for the organisational hierarchy formatter.
///
/// Loaded once and injected into [`crate::formatting::HierarchyFormatter`];
/// tests build their own fixtures with [`OrganizationDirectory::new`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrganizationDirectory {
    /// Map of unit code to long display name.
    pub unit_names: BTreeMap<String, String>,
    /// Top-level administrative codes that are shown bare and have no sub-units.
    #[serde(default)]
    pub administrative_codes: Vec<String>,
    /// Historical labels keyed by organisation name, then unit long name.
    #[serde(default)]
    pub legacy_units: BTreeMap<String, BTreeMap<String, String>>,
    /// Label used when nothing can be resolved.
    #[serde(default = "default_not_available")]
    pub not_available: String,
    /// Separator between hierarchy levels in structure labels.
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl OrganizationDirectory {
    /// Creates a directory from a code table and the administrative codes.
    ///
    /// # Example
    ///
    /// ```
    /// use personnel_engine::config::OrganizationDirectory;
    ///
    /// let directory = OrganizationDirectory::new(
    ///     [("MO", "Movement Operations")],
    ///     ["EGM", "GM"],
    /// );
    /// assert_eq!(directory.long_name("MO"), Some("Movement Operations"));
    /// assert!(directory.is_administrative("GM"));
    /// ```
    pub fn new<N, K, V, A, C>(unit_names: N, administrative_codes: A) -> Self
    where
        N: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
        A: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            unit_names: unit_names
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            administrative_codes: administrative_codes.into_iter().map(Into::into).collect(),
            legacy_units: BTreeMap::new(),
            not_available: default_not_available(),
            separator: default_separator(),
        }
    }

    /// Adds a legacy (organisation name, unit long name) → label entry.
    pub fn with_legacy_unit(
        mut self,
        organization: impl Into<String>,
        unit_name: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.legacy_units
            .entry(organization.into())
            .or_default()
            .insert(unit_name.into(), label.into());
        self
    }

    /// Returns the long name for a unit code.
    pub fn long_name(&self, code: &str) -> Option<&str> {
        self.unit_names.get(code.trim()).map(String::as_str)
    }

    /// Returns true for the designated administrative codes.
    pub fn is_administrative(&self, code: &str) -> bool {
        let code = code.trim();
        self.administrative_codes.iter().any(|c| c == code)
    }

    /// Looks up a legacy label by organisation name and unit long name.
    pub fn legacy_label(&self, organization: &str, unit_name: &str) -> Option<&str> {
        self.legacy_units
            .get(organization.trim())
            .and_then(|units| units.get(unit_name.trim()))
            .map(String::as_str)
    }
}

/// A unit to seed, with its sub-units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnitSeed {
    /// Unit code.
    pub code: String,
    /// Organisation group label.
    pub org_group: String,
    /// Sub-unit names.
    #[serde(default)]
    pub sub_units: Vec<String>,
}

/// An organisation to seed, with its units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrganizationSeed {
    /// Division name.
    pub name: String,
    /// Units in this division.
    #[serde(default)]
    pub units: Vec<UnitSeed>,
}

/// Contents of `organization.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrganizationConfig {
    /// Formatter lookup data.
    #[serde(flatten)]
    pub directory: OrganizationDirectory,
    /// Initial hierarchy.
    #[serde(default)]
    pub structure: Vec<OrganizationSeed>,
}

/// Contents of `employee.yaml`: constants applied on creation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmployeeDefaults {
    /// Workplace filled in when a new record has a work-start date.
    pub default_workplace: String,
    /// Branch filled in when a new record has a work-start date.
    pub default_branch: String,
}

fn default_recent_hire_months() -> u32 {
    6
}

fn default_upcoming_retirement_months() -> u32 {
    12
}

fn default_null_label() -> String {
    "Null".to_string()
}

fn default_unspecified_label() -> String {
    "Unspecified".to_string()
}

/// Contents of `statistics.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatisticsConfig {
    /// Window, in months before the reference date, for counting new hires.
    #[serde(default = "default_recent_hire_months")]
    pub recent_hire_months: u32,
    /// Window, in months after the reference date, for counting retirements.
    #[serde(default = "default_upcoming_retirement_months")]
    pub upcoming_retirement_months: u32,
    /// Canonical temporary-staffing subcategories, in display order.
    #[serde(default)]
    pub staffing_subcategories: Vec<String>,
    /// Bucket for records with no value.
    #[serde(default = "default_null_label")]
    pub null_label: String,
    /// Bucket for records whose value is explicitly unspecified.
    #[serde(default = "default_unspecified_label")]
    pub unspecified_label: String,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            recent_hire_months: default_recent_hire_months(),
            upcoming_retirement_months: default_upcoming_retirement_months(),
            staffing_subcategories: Vec::new(),
            null_label: default_null_label(),
            unspecified_label: default_unspecified_label(),
        }
    }
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct AppConfig {
    organization: OrganizationConfig,
    employee: EmployeeDefaults,
    statistics: StatisticsConfig,
}

impl AppConfig {
    /// Creates a new AppConfig from its component parts.
    pub fn new(
        organization: OrganizationConfig,
        employee: EmployeeDefaults,
        statistics: StatisticsConfig,
    ) -> Self {
        Self {
            organization,
            employee,
            statistics,
        }
    }

    /// Returns the organisation configuration.
    pub fn organization(&self) -> &OrganizationConfig {
        &self.organization
    }

    /// Returns the employee defaults.
    pub fn employee(&self) -> &EmployeeDefaults {
        &self.employee
    }

    /// Returns the statistics configuration.
    pub fn statistics(&self) -> &StatisticsConfig {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_lookups_trim_input() {
        let directory = OrganizationDirectory::new([("MO", "Movement Operations")], ["EGM"])
            .with_legacy_unit("Operasi Darat", "Ramp Service", "(MO) Movement Operations");

        assert_eq!(directory.long_name(" MO "), Some("Movement Operations"));
        assert_eq!(directory.long_name("XX"), None);
        assert!(directory.is_administrative("EGM "));
        assert!(!directory.is_administrative("MO"));
        assert_eq!(
            directory.legacy_label("Operasi Darat", "Ramp Service"),
            Some("(MO) Movement Operations")
        );
        assert_eq!(directory.legacy_label("Operasi Darat", "Cargo"), None);
    }

    #[test]
    fn test_organization_config_parses_with_defaults() {
        let yaml = r#"
unit_names:
  MO: Movement Operations
administrative_codes: [EGM, GM]
structure:
  - name: Operations
    units:
      - code: MO
        org_group: Airside
        sub_units: [Ramp Handling]
"#;
        let config: OrganizationConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.directory.not_available, "-");
        assert_eq!(config.directory.separator, " - ");
        assert_eq!(config.structure[0].units[0].sub_units, vec!["Ramp Handling"]);
    }

    #[test]
    fn test_statistics_config_defaults_windows() {
        let config: StatisticsConfig = serde_yaml::from_str("staffing_subcategories: []").unwrap();
        assert_eq!(config.recent_hire_months, 6);
        assert_eq!(config.upcoming_retirement_months, 12);
        assert_eq!(config, StatisticsConfig::default());
    }
}
