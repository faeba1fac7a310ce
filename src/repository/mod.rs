//! Record storage.
//!
//! Employees are stored behind the [`EmployeeRepository`] trait; the
//! organisational hierarchy lives in a [`UnitRegistry`].

mod memory;
mod units;

pub use memory::InMemoryEmployeeStore;
pub use units::{HierarchyIssue, HierarchySnapshot, UnitRegistry};

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::Employee;

/// Storage for employee records.
///
/// Implementations persist records exactly as given; derived fields are the
/// caller's responsibility (see [`crate::service::EmployeeService`]).
pub trait EmployeeRepository: Send + Sync {
    /// Stores a new record.
    fn insert(&self, employee: Employee) -> EngineResult<Employee>;

    /// Replaces an existing record.
    fn update(&self, employee: Employee) -> EngineResult<Employee>;

    /// Fetches a record by id.
    fn get(&self, id: Uuid) -> EngineResult<Employee>;

    /// Returns every record, soft-deleted ones included.
    fn list(&self) -> EngineResult<Vec<Employee>>;
}
