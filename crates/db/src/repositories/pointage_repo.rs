//! Repository for the `pointages` table.

use sqlx::SqlitePool;

use crate::models::pointage::Pointage;

const COLUMNS: &str = "id, employee_id, employee_name, type, timestamp, date, is_synced";

/// Provides insert-or-ignore and read access for time-clock events.
pub struct PointageRepo;

impl PointageRepo {
    /// Insert a pointage unless one with the same id already exists.
    ///
    /// Returns `true` when a row was written, `false` when the id was
    /// already present and the submission was dropped.
    pub async fn insert_or_ignore(pool: &SqlitePool, pointage: &Pointage) -> Result<bool, sqlx::Error> {
        let query = format!("INSERT OR IGNORE INTO pointages ({COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?)");
        let result = sqlx::query(&query)
            .bind(&pointage.id)
            .bind(&pointage.employee_id)
            .bind(&pointage.employee_name)
            .bind(&pointage.kind)
            .bind(pointage.timestamp)
            .bind(&pointage.date)
            .bind(pointage.is_synced)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Most recent pointage for an employee (highest timestamp).
    pub async fn latest_for_employee(
        pool: &SqlitePool,
        employee_id: &str,
    ) -> Result<Option<Pointage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pointages
             WHERE employee_id = ?
             ORDER BY timestamp DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Pointage>(&query)
            .bind(employee_id)
            .fetch_optional(pool)
            .await
    }

    /// Full history for an employee, newest first.
    pub async fn list_for_employee(
        pool: &SqlitePool,
        employee_id: &str,
    ) -> Result<Vec<Pointage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pointages
             WHERE employee_id = ?
             ORDER BY timestamp DESC"
        );
        sqlx::query_as::<_, Pointage>(&query)
            .bind(employee_id)
            .fetch_all(pool)
            .await
    }

    /// Every pointage, newest first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Pointage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pointages ORDER BY timestamp DESC");
        sqlx::query_as::<_, Pointage>(&query).fetch_all(pool).await
    }

    /// Pointages not yet acknowledged by the offline client.
    pub async fn list_unsynced(pool: &SqlitePool) -> Result<Vec<Pointage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pointages WHERE is_synced = 0 ORDER BY timestamp DESC"
        );
        sqlx::query_as::<_, Pointage>(&query).fetch_all(pool).await
    }
}
