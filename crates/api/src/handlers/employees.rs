//! Handlers for the `/api/employees` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pointage_core::error::CoreError;
use pointage_core::validation::EMPLOYEE_FIELDS;
use pointage_db::models::employee::UpsertEmployee;
use pointage_db::repositories::{EmployeeRepo, PointageRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::payload::{self, JsonBody};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UpsertResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// POST /api/employees
///
/// Create an employee or overwrite every column of an existing one.
pub async fn upsert_employee(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<impl IntoResponse> {
    let input: UpsertEmployee = payload::decode(body, EMPLOYEE_FIELDS)?;
    let employee = input.into_record();

    EmployeeRepo::upsert(&state.pool, &employee).await?;

    tracing::info!(
        employee_id = %employee.id,
        is_active = employee.is_active,
        "Employee upserted",
    );

    Ok((
        StatusCode::CREATED,
        Json(UpsertResponse {
            status: "success",
            message: "Employé enregistré",
        }),
    ))
}

/// GET /api/employees
pub async fn list_employees(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let employees = EmployeeRepo::list(&state.pool, false).await?;
    Ok(Json(employees))
}

/// GET /api/employees/active
pub async fn list_active_employees(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let employees = EmployeeRepo::list(&state.pool, true).await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id}/position
///
/// The employee's latest pointage, or 404 when none was recorded.
pub async fn get_position(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let latest = PointageRepo::latest_for_employee(&state.pool, &employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "pointage",
            id: employee_id,
        }))?;

    Ok(Json(latest))
}
