//! Route definitions for the `/salary` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::salary;
use crate::state::AppState;

/// Routes mounted at `/salary`.
///
/// ```text
/// POST /          -> create_salary
/// GET  /history   -> salary_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(salary::create_salary))
        .route("/history", get(salary::salary_history))
}
