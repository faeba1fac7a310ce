//! Personnel Engine for ground-handling workforce records
//!
//! This crate keeps employee records consistent and reportable: it derives
//! age, retirement date, tenure, and employment status from source dates,
//! renders organisational placement labels for the unit hierarchy, and
//! aggregates workforce statistics for dashboards.
//!
//! The [`service::EmployeeService`] ties these together over an
//! [`repository::EmployeeRepository`]; the [`api`] module exposes it over
//! HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod formatting;
pub mod models;
pub mod repository;
pub mod service;
pub mod statistics;
pub mod telemetry;
