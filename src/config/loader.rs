//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine's
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AppConfig, EmployeeDefaults, OrganizationConfig, OrganizationDirectory, OrganizationSeed,
    StatisticsConfig,
};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/airport/
/// ├── organization.yaml   # Unit names, legacy labels, hierarchy seed
/// ├── employee.yaml       # Defaults applied to new records
/// └── statistics.yaml     # Dashboard windows and staffing subcategories
/// ```
///
/// # Example
///
/// ```no_run
/// use personnel_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/airport").unwrap();
/// println!("Known units: {}", loader.directory().unit_names.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let organization = Self::load_yaml::<OrganizationConfig>(&path.join("organization.yaml"))?;
        let employee = Self::load_yaml::<EmployeeDefaults>(&path.join("employee.yaml"))?;
        let statistics = Self::load_yaml::<StatisticsConfig>(&path.join("statistics.yaml"))?;

        debug!(
            path = %path.display(),
            units = organization.directory.unit_names.len(),
            organizations = organization.structure.len(),
            "Loaded configuration"
        );

        Ok(Self {
            config: AppConfig::new(organization, employee, statistics),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the formatter lookup data.
    pub fn directory(&self) -> &OrganizationDirectory {
        &self.config.organization().directory
    }

    /// Returns the hierarchy seed.
    pub fn structure(&self) -> &[OrganizationSeed] {
        &self.config.organization().structure
    }

    /// Returns the defaults applied to new employee records.
    pub fn employee_defaults(&self) -> &EmployeeDefaults {
        self.config.employee()
    }

    /// Returns the statistics configuration.
    pub fn statistics(&self) -> &StatisticsConfig {
        self.config.statistics()
    }
}
