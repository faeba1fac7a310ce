//! Configuration loading and management for the Personnel Engine.
//!
//! This module loads the formatter lookup tables, the organisational
//! hierarchy seed, employee defaults, and dashboard settings from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use personnel_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/airport").unwrap();
//! println!("Default branch: {}", config.employee_defaults().default_branch);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, EmployeeDefaults, OrganizationConfig, OrganizationDirectory, OrganizationSeed,
    StatisticsConfig, UnitSeed,
};
