//! Time-clock event ("pointage") model and DTO.

use pointage_core::types::EpochMillis;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pointages` table. Immutable once written.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pointage {
    pub id: String,
    pub employee_id: String,
    /// Copy sent by the client, never re-derived from `employees`.
    pub employee_name: String,
    /// `ARRIVEE` or `DEPART`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: EpochMillis,
    pub date: String,
    pub is_synced: bool,
}

/// Body of `POST /api/pointages`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPointage {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: EpochMillis,
    pub date: String,
}

impl NewPointage {
    /// Pointages arrive from the syncing client, so they are stored as synced.
    pub fn into_record(self) -> Pointage {
        Pointage {
            id: self.id,
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            kind: self.kind,
            timestamp: self.timestamp,
            date: self.date,
            is_synced: true,
        }
    }
}
