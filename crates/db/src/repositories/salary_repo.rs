//! Repository for the `salaries` table.

use sqlx::SqlitePool;

use crate::models::salary::SalaryRecord;

const COLUMNS: &str =
    "id, employee_id, employee_name, type, amount, hours_worked, period, date, is_synced";

/// Append-only access to salary records.
pub struct SalaryRepo;

impl SalaryRepo {
    /// Plain insert. A duplicate id fails with the store's primary key
    /// violation.
    pub async fn insert(pool: &SqlitePool, record: &SalaryRecord) -> Result<(), sqlx::Error> {
        let query = format!("INSERT INTO salaries ({COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)");
        sqlx::query(&query)
            .bind(&record.id)
            .bind(&record.employee_id)
            .bind(&record.employee_name)
            .bind(&record.kind)
            .bind(record.amount)
            .bind(record.hours_worked)
            .bind(&record.period)
            .bind(record.date)
            .bind(record.is_synced)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// All salary records, most recent `date` first.
    pub async fn history(pool: &SqlitePool) -> Result<Vec<SalaryRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM salaries ORDER BY date DESC");
        sqlx::query_as::<_, SalaryRecord>(&query).fetch_all(pool).await
    }
}
