//! Canned endpoints standing in for the zone-tracking hardware.
//!
//! None of these touch the database; the values are fixed placeholders
//! until the ESP32 integration exists.

use axum::body::Bytes;
use axum::extract::Path;
use axum::Json;
use pointage_core::types::{now_millis, EpochMillis};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

const FIRMWARE_VERSION: &str = "1.2.0";
const UPTIME_SECONDS: u64 = 3672;
const DEFAULT_BUZZER_MS: u64 = 1000;

#[derive(Debug, Serialize)]
pub struct ZoneStatistic {
    pub zone_name: &'static str,
    pub duration_seconds: u64,
}

#[derive(Debug, Serialize)]
pub struct Esp32Status {
    pub is_online: bool,
    pub last_seen: EpochMillis,
    pub firmware_version: &'static str,
    pub uptime_seconds: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuzzerRequest {
    #[serde(default = "default_buzzer_ms")]
    pub duration_ms: u64,
}

fn default_buzzer_ms() -> u64 {
    DEFAULT_BUZZER_MS
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuzzerResponse {
    pub status: &'static str,
    pub duration_ms: u64,
    pub timestamp: EpochMillis,
}

/// GET /api/statistics/zones/{id}
pub async fn zone_statistics(Path(employee_id): Path<String>) -> Json<Vec<ZoneStatistic>> {
    tracing::debug!(%employee_id, "Serving placeholder zone statistics");
    Json(vec![
        ZoneStatistic {
            zone_name: "Zone A",
            duration_seconds: 2700,
        },
        ZoneStatistic {
            zone_name: "Zone B",
            duration_seconds: 1800,
        },
    ])
}

/// GET /api/esp32/status
pub async fn esp32_status() -> Json<Esp32Status> {
    Json(Esp32Status {
        is_online: true,
        last_seen: now_millis(),
        firmware_version: FIRMWARE_VERSION,
        uptime_seconds: UPTIME_SECONDS,
    })
}

/// POST /api/esp32/buzzer
///
/// An empty body buzzes for the default duration.
pub async fn activate_buzzer(body: Bytes) -> AppResult<Json<BuzzerResponse>> {
    let input: BuzzerRequest = if body.is_empty() {
        BuzzerRequest {
            duration_ms: DEFAULT_BUZZER_MS,
        }
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid payload: {e}")))?
    };

    tracing::info!(duration_ms = input.duration_ms, "Buzzer activated");

    Ok(Json(BuzzerResponse {
        status: "buzzer_activé",
        duration_ms: input.duration_ms,
        timestamp: now_millis(),
    }))
}
