//! Employee model and upsert DTO.

use pointage_core::types::{now_millis, EpochMillis};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `employees` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub nom: String,
    pub prenom: String,
    pub date_naissance: Option<String>,
    pub lieu_naissance: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub profession: Option<String>,
    /// Pay category, e.g. `hourly` or `salaried`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub taux_horaire: Option<f64>,
    pub frais_ecolage: Option<f64>,
    pub qr_code: Option<String>,
    pub is_active: bool,
    pub created_at: EpochMillis,
    pub is_synced: bool,
}

/// Body of `POST /api/employees`.
///
/// Omitted `isActive` defaults to `true` and omitted `createdAt` to now.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertEmployee {
    pub id: String,
    pub nom: String,
    pub prenom: String,
    pub date_naissance: Option<String>,
    pub lieu_naissance: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub profession: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub taux_horaire: Option<f64>,
    pub frais_ecolage: Option<f64>,
    pub qr_code: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default = "now_millis")]
    pub created_at: EpochMillis,
}

fn default_active() -> bool {
    true
}

impl UpsertEmployee {
    /// Build the row to store. Employees written through the API are
    /// always marked as synced.
    pub fn into_record(self) -> Employee {
        Employee {
            id: self.id,
            nom: self.nom,
            prenom: self.prenom,
            date_naissance: self.date_naissance,
            lieu_naissance: self.lieu_naissance,
            telephone: self.telephone,
            email: self.email,
            profession: self.profession,
            kind: self.kind,
            taux_horaire: self.taux_horaire,
            frais_ecolage: self.frais_ecolage,
            qr_code: self.qr_code,
            is_active: self.is_active,
            created_at: self.created_at,
            is_synced: true,
        }
    }
}
