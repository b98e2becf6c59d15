//! Root-level HTML routes (not under `/api`).

use axum::routing::get;
use axum::Router;

use crate::handlers::{auth, dashboard};
use crate::state::AppState;

/// Where anonymous dashboard visitors and logged-out users land.
pub const LOGIN_PATH: &str = "/login";

/// ```text
/// GET /login      -> login_page
/// GET /logout     -> logout
/// GET /dashboard  -> dashboard (session required)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(LOGIN_PATH, get(dashboard::login_page))
        .route("/logout", get(auth::logout))
        .route("/dashboard", get(dashboard::dashboard))
}
