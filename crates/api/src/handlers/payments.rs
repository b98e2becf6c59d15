//! Handler for the employee payments listing.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use pointage_db::models::payment::PaymentJoin;
use pointage_db::repositories::PaymentRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/employee_payments
///
/// Every active employee with each of their payments. Employees without
/// payments are listed once with null payment fields.
pub async fn list_employee_payments(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let payments = PaymentRepo::employee_payments(&state.pool, PaymentJoin::Left).await?;
    Ok(Json(payments))
}
