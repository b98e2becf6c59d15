//! Forbidden-zone alert model and DTO.

use pointage_core::types::EpochMillis;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `alerts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: i64,
    pub employee_id: String,
    pub employee_name: String,
    pub zone_name: String,
    pub timestamp: EpochMillis,
    pub created_at: EpochMillis,
}

/// Body of `POST /api/alerts/forbidden-zone`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    pub employee_id: String,
    pub employee_name: String,
    pub zone_name: String,
    pub timestamp: EpochMillis,
}
