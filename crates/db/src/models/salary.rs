//! Salary record model and DTO.

use pointage_core::types::EpochMillis;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `salaries` table. Append-only.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    /// `salaire` or `ecolage`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub hours_worked: Option<f64>,
    pub period: String,
    pub date: EpochMillis,
    pub is_synced: bool,
}

/// Body of `POST /api/salary`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSalaryRecord {
    /// Defaults to the decimal form of `date` when omitted.
    pub id: Option<String>,
    pub employee_id: String,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub hours_worked: Option<f64>,
    pub period: String,
    pub date: EpochMillis,
}

impl NewSalaryRecord {
    /// Salary records created through the API start unsynced.
    pub fn into_record(self) -> SalaryRecord {
        let id = self.id.unwrap_or_else(|| self.date.to_string());
        SalaryRecord {
            id,
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            kind: self.kind,
            amount: self.amount,
            hours_worked: self.hours_worked,
            period: self.period,
            date: self.date,
            is_synced: false,
        }
    }
}
