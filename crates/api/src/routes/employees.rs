//! Route definitions for the `/employees` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::employees;
use crate::state::AppState;

/// Routes mounted at `/employees`.
///
/// ```text
/// GET  /                -> list_employees
/// POST /                -> upsert_employee
/// GET  /active          -> list_active_employees
/// GET  /{id}/position   -> get_position
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(employees::list_employees).post(employees::upsert_employee),
        )
        .route("/active", get(employees::list_active_employees))
        .route("/{id}/position", get(employees::get_position))
}
