//! HTML pages: login form and payments dashboard.

use axum::extract::State;
use axum::response::Html;
use pointage_db::models::payment::PaymentJoin;
use pointage_db::repositories::PaymentRepo;

use crate::error::AppResult;
use crate::middleware::session::DashboardSession;
use crate::pages;
use crate::state::AppState;

/// GET /login
pub async fn login_page() -> Html<&'static str> {
    Html(pages::LOGIN_PAGE)
}

/// GET /dashboard
///
/// Lists actual payments only (inner join); unpaid employees are left out.
pub async fn dashboard(
    DashboardSession(user): DashboardSession,
    State(state): State<AppState>,
) -> AppResult<Html<String>> {
    let payments = PaymentRepo::employee_payments(&state.pool, PaymentJoin::Inner).await?;
    tracing::debug!(user_id = %user.user_id, rows = payments.len(), "Rendering dashboard");
    Ok(Html(pages::render_dashboard(&payments, &user)))
}
