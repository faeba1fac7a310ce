//! HTTP API module for the Personnel Engine.
//!
//! This module provides the REST endpoints for employee records, the
//! organisational hierarchy, statistics, and CSV export.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AsOfQuery, CountQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::{AppState, Service};
