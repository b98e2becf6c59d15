//! Route definitions for the placeholder device endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::device;
use crate::state::AppState;

/// ```text
/// GET  /statistics/zones/{id}  -> zone_statistics
/// GET  /esp32/status           -> esp32_status
/// POST /esp32/buzzer           -> activate_buzzer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/statistics/zones/{id}", get(device::zone_statistics))
        .route("/esp32/status", get(device::esp32_status))
        .route("/esp32/buzzer", post(device::activate_buzzer))
}
