use axum::routing::get;
use axum::Router;

use crate::handlers::payments;
use crate::state::AppState;

/// ```text
/// GET /employee_payments -> list_employee_payments
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/employee_payments", get(payments::list_employee_payments))
}
