//! Handlers for pointages (time-clock events): submission, listing,
//! per-employee movements and the sync feed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pointage_core::validation::POINTAGE_FIELDS;
use pointage_db::models::pointage::NewPointage;
use pointage_db::repositories::PointageRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::check_employee_reference;
use crate::payload::{self, JsonBody};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// POST /api/pointages
///
/// Idempotent: resubmitting an id that is already stored returns the same
/// 201 and leaves the stored row untouched.
pub async fn create_pointage(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<impl IntoResponse> {
    let input: NewPointage = payload::decode(body, POINTAGE_FIELDS)?;
    check_employee_reference(&state, &input.employee_id).await?;

    let pointage = input.into_record();
    let inserted = PointageRepo::insert_or_ignore(&state.pool, &pointage).await?;

    if inserted {
        tracing::info!(
            pointage_id = %pointage.id,
            employee_id = %pointage.employee_id,
            kind = %pointage.kind,
            "Pointage recorded",
        );
    } else {
        tracing::debug!(pointage_id = %pointage.id, "Duplicate pointage ignored");
    }

    Ok((
        StatusCode::CREATED,
        Json(StatusResponse {
            status: "pointage_enregistré",
        }),
    ))
}

/// GET /api/pointages
pub async fn list_pointages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pointages = PointageRepo::list_all(&state.pool).await?;
    Ok(Json(pointages))
}

/// GET /api/sync/pointages
pub async fn list_unsynced_pointages(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let pointages = PointageRepo::list_unsynced(&state.pool).await?;
    Ok(Json(pointages))
}

/// GET /api/movements/{id}
pub async fn list_movements(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let pointages = PointageRepo::list_for_employee(&state.pool, &employee_id).await?;
    Ok(Json(pointages))
}
