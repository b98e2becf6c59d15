//! Repository for the `alerts` table.

use pointage_core::types::EpochMillis;
use sqlx::SqlitePool;

use crate::models::alert::{Alert, NewAlert};

const COLUMNS: &str = "id, employee_id, employee_name, zone_name, timestamp, created_at";

pub struct AlertRepo;

impl AlertRepo {
    /// Record a forbidden-zone alert, returning the stored row.
    pub async fn create(
        pool: &SqlitePool,
        input: &NewAlert,
        created_at: EpochMillis,
    ) -> Result<Alert, sqlx::Error> {
        let query = format!(
            "INSERT INTO alerts (employee_id, employee_name, zone_name, timestamp, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(&input.employee_id)
            .bind(&input.employee_name)
            .bind(&input.zone_name)
            .bind(input.timestamp)
            .bind(created_at)
            .fetch_one(pool)
            .await
    }

    /// All alerts, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Alert>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alerts ORDER BY timestamp DESC, id DESC");
        sqlx::query_as::<_, Alert>(&query).fetch_all(pool).await
    }
}
