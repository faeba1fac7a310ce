//! Core data models for the Personnel Engine.
//!
//! This module contains the employee record and the organisational hierarchy.

mod employee;
mod organization;

pub use employee::{Employee, EmployeeUpdate, EmploymentStatus, NewEmployee, Sex};
pub(crate) use employee::non_blank;
pub use organization::{Organization, SubUnit, Unit};
