//! Handlers for salary records.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pointage_core::validation::SALARY_FIELDS;
use pointage_db::models::salary::NewSalaryRecord;
use pointage_db::repositories::SalaryRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::check_employee_reference;
use crate::payload::{self, JsonBody};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreatedSalary {
    pub status: &'static str,
    pub id: String,
}

/// POST /api/salary
///
/// Plain insert: a record id that already exists fails with a storage error.
pub async fn create_salary(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<impl IntoResponse> {
    let input: NewSalaryRecord = payload::decode(body, SALARY_FIELDS)?;
    check_employee_reference(&state, &input.employee_id).await?;

    let record = input.into_record();
    SalaryRepo::insert(&state.pool, &record).await?;

    tracing::info!(
        salary_id = %record.id,
        employee_id = %record.employee_id,
        amount = record.amount,
        period = %record.period,
        "Salary record created",
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedSalary {
            status: "success",
            id: record.id,
        }),
    ))
}

/// GET /api/salary/history
pub async fn salary_history(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = SalaryRepo::history(&state.pool).await?;
    Ok(Json(records))
}
