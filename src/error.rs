//! Error types for the Personnel Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while maintaining employee records.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Personnel Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use personnel_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/organization.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/organization.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An end date was not strictly after its paired start date.
    #[error("Invalid date range: '{end_field}' ({end}) must be after '{start_field}' ({start})")]
    InvalidDateRange {
        /// The name of the start-date field.
        start_field: &'static str,
        /// The name of the end-date field.
        end_field: &'static str,
        /// The start date that was supplied.
        start: NaiveDate,
        /// The end date that was supplied.
        end: NaiveDate,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// No unit exists with the given id.
    #[error("Unit not found: {id}")]
    UnitNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// Another employee already holds a unique identifier.
    #[error("Duplicate employee {field}: {value}")]
    DuplicateEmployee {
        /// The unique field that collided.
        field: &'static str,
        /// The colliding value.
        value: String,
    },

    /// The underlying record store failed.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },

    /// Writing an export failed.
    #[error("Export error: {message}")]
    Export {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<csv::Error> for EngineError {
    fn from(error: csv::Error) -> Self {
        EngineError::Export {
            message: error.to_string(),
        }
    }
}
