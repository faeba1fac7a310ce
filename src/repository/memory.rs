//! In-memory employee store.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::EmployeeRepository;

/// An [`EmployeeRepository`] backed by a map behind a lock.
///
/// Concurrent writers are not coordinated beyond the lock: the last write
/// to a record wins.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    records: RwLock<HashMap<Uuid, Employee>>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> EngineError {
    EngineError::Storage {
        message: "employee store lock poisoned".to_string(),
    }
}

fn check_unique(records: &HashMap<Uuid, Employee>, employee: &Employee) -> EngineResult<()> {
    for other in records.values().filter(|other| other.id != employee.id) {
        if other.employee_number == employee.employee_number {
            return Err(EngineError::DuplicateEmployee {
                field: "employee_number",
                value: employee.employee_number.clone(),
            });
        }
        if let Some(national_id) = &employee.national_id {
            if other.national_id.as_ref() == Some(national_id) {
                return Err(EngineError::DuplicateEmployee {
                    field: "national_id",
                    value: national_id.clone(),
                });
            }
        }
    }
    Ok(())
}

impl EmployeeRepository for InMemoryEmployeeStore {
    fn insert(&self, employee: Employee) -> EngineResult<Employee> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        check_unique(&records, &employee)?;
        records.insert(employee.id, employee.clone());
        Ok(employee)
    }

    fn update(&self, employee: Employee) -> EngineResult<Employee> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        if !records.contains_key(&employee.id) {
            return Err(EngineError::EmployeeNotFound { id: employee.id });
        }
        check_unique(&records, &employee)?;
        records.insert(employee.id, employee.clone());
        Ok(employee)
    }

    fn get(&self, id: Uuid) -> EngineResult<Employee> {
        let records = self.records.read().map_err(|_| poisoned())?;
        records
            .get(&id)
            .cloned()
            .ok_or(EngineError::EmployeeNotFound { id })
    }

    fn list(&self) -> EngineResult<Vec<Employee>> {
        let records = self.records.read().map_err(|_| poisoned())?;
        let mut employees: Vec<Employee> = records.values().cloned().collect();
        employees.sort_by(|a, b| a.employee_number.cmp(&b.employee_number));
        Ok(employees)
    }
}
