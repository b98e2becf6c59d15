//! Handlers for forbidden-zone alerts.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pointage_core::types::now_millis;
use pointage_core::validation::ALERT_FIELDS;
use pointage_db::models::alert::NewAlert;
use pointage_db::repositories::AlertRepo;

use crate::error::AppResult;
use crate::handlers::pointages::StatusResponse;
use crate::payload::{self, JsonBody};
use crate::state::AppState;

/// POST /api/alerts/forbidden-zone
pub async fn report_forbidden_zone(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<impl IntoResponse> {
    let input: NewAlert = payload::decode(body, ALERT_FIELDS)?;
    let alert = AlertRepo::create(&state.pool, &input, now_millis()).await?;

    tracing::warn!(
        alert_id = alert.id,
        employee_id = %alert.employee_id,
        zone = %alert.zone_name,
        "Forbidden zone entered",
    );

    Ok((
        StatusCode::CREATED,
        Json(StatusResponse {
            status: "alerte_enregistrée",
        }),
    ))
}

/// GET /api/alerts
pub async fn list_alerts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let alerts = AlertRepo::list(&state.pool).await?;
    Ok(Json(alerts))
}
