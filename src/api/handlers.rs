//! HTTP request handlers for the Personnel Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{EmployeeUpdate, NewEmployee};
use crate::statistics::FilterCriteria;

use super::request::{AsOfQuery, CountQuery};
use super::response::ApiErrorResponse;
use super::state::AppState;

type HandlerResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(create_employee).get(list_employees))
        .route("/employees/export", get(export_employees))
        .route(
            "/employees/:id",
            get(get_employee)
                .put(update_employee)
                .delete(deactivate_employee),
        )
        .route("/units", get(list_units))
        .route("/units/issues", get(unit_issues))
        .route("/statistics/dashboard", get(dashboard))
        .route("/statistics/count", get(count))
        .with_state(state)
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn rejected(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %rejection.body_text(),
        "Rejected request body"
    );
    rejection.into()
}

fn failed(correlation_id: Uuid, error: EngineError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    error.into()
}

/// Handler for POST /employees.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create request");

    let Json(payload) = payload.map_err(|rejection| rejected(correlation_id, rejection))?;
    let service = state.service();
    let employee = service
        .create(payload, today())
        .map_err(|err| failed(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        "Employee created"
    );
    let view = service
        .view(employee)
        .map_err(|err| failed(correlation_id, err))?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// Handler for GET /employees.
async fn list_employees(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let service = state.service();
    let views = service
        .list(&criteria, today())
        .and_then(|employees| service.views(employees))
        .map_err(|err| failed(correlation_id, err))?;

    info!(correlation_id = %correlation_id, count = views.len(), "Listed employees");
    Ok(Json(views))
}

/// Handler for GET /employees/:id.
async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let service = state.service();
    let view = service
        .get(id, today())
        .and_then(|employee| service.view(employee))
        .map_err(|err| failed(correlation_id, err))?;
    Ok(Json(view))
}

/// Handler for PUT /employees/:id.
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<EmployeeUpdate>, JsonRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing update request");

    let Json(changes) = payload.map_err(|rejection| rejected(correlation_id, rejection))?;
    let service = state.service();
    let view = service
        .update(id, changes, today())
        .and_then(|employee| service.view(employee))
        .map_err(|err| failed(correlation_id, err))?;
    Ok(Json(view))
}

/// Handler for DELETE /employees/:id. The record is kept but flagged
/// inactive.
async fn deactivate_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let service = state.service();
    let view = service
        .deactivate(id)
        .and_then(|employee| service.view(employee))
        .map_err(|err| failed(correlation_id, err))?;

    info!(correlation_id = %correlation_id, employee_id = %id, "Employee deactivated");
    Ok(Json(view))
}

/// Handler for GET /employees/export.
async fn export_employees(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let mut buffer = Vec::new();
    let rows = state
        .service()
        .export_csv(&mut buffer, &criteria, today())
        .map_err(|err| failed(correlation_id, err))?;

    info!(correlation_id = %correlation_id, rows, "Export completed");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"employees.csv\"",
            ),
        ],
        buffer,
    ))
}

/// Handler for GET /units.
async fn list_units(State(state): State<AppState>) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let units = state
        .service()
        .unit_views()
        .map_err(|err| failed(correlation_id, err))?;
    Ok(Json(units))
}

/// Handler for GET /units/issues.
async fn unit_issues(State(state): State<AppState>) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let issues = state
        .service()
        .hierarchy_issues()
        .map_err(|err| failed(correlation_id, err))?;

    if !issues.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            issues = issues.len(),
            "Organisational hierarchy has consistency issues"
        );
    }
    Ok(Json(issues))
}

/// Handler for GET /statistics/dashboard.
async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<AsOfQuery>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let as_of = query.as_of.unwrap_or_else(today);
    let statistics = state
        .service()
        .dashboard(as_of)
        .map_err(|err| failed(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        %as_of,
        total = statistics.total,
        "Dashboard computed"
    );
    Ok(Json(statistics))
}

/// Handler for GET /statistics/count.
async fn count(
    State(state): State<AppState>,
    Query(query): Query<CountQuery>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let (field, criteria) = query.into_parts();
    let counts = state
        .service()
        .count_by(field, &criteria)
        .map_err(|err| failed(correlation_id, err))?;
    Ok(Json(counts))
}
