//! Application state for the Personnel Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::repository::InMemoryEmployeeStore;
use crate::service::EmployeeService;

/// The service type the HTTP layer runs against.
pub type Service = EmployeeService<InMemoryEmployeeStore>;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the employee service and its loaded configuration.
#[derive(Clone)]
pub struct AppState {
    service: Arc<Service>,
}

impl AppState {
    /// Creates a new application state backed by an empty in-memory store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::from_service(EmployeeService::from_config(
            InMemoryEmployeeStore::new(),
            &config,
        ))
    }

    /// Creates a new application state around an existing service.
    pub fn from_service(service: Service) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Returns a reference to the employee service.
    pub fn service(&self) -> &Service {
        &self.service
    }
}
