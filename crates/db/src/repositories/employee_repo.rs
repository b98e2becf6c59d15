//! Repository for the `employees` table.

use sqlx::SqlitePool;

use crate::models::employee::Employee;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nom, prenom, date_naissance, lieu_naissance, telephone, email, \
                       profession, type, taux_horaire, frais_ecolage, qr_code, is_active, \
                       created_at, is_synced";

/// Provides upsert and listing for employees. There is no delete path.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee or replace every column of the existing row
    /// with the same id.
    pub async fn upsert(pool: &SqlitePool, employee: &Employee) -> Result<(), sqlx::Error> {
        let query = format!(
            "INSERT OR REPLACE INTO employees ({COLUMNS})
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        );
        sqlx::query(&query)
            .bind(&employee.id)
            .bind(&employee.nom)
            .bind(&employee.prenom)
            .bind(&employee.date_naissance)
            .bind(&employee.lieu_naissance)
            .bind(&employee.telephone)
            .bind(&employee.email)
            .bind(&employee.profession)
            .bind(&employee.kind)
            .bind(employee.taux_horaire)
            .bind(employee.frais_ecolage)
            .bind(&employee.qr_code)
            .bind(employee.is_active)
            .bind(employee.created_at)
            .bind(employee.is_synced)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// List employees ordered by last name, then first name.
    ///
    /// With `active_only`, inactive employees are left out.
    pub async fn list(pool: &SqlitePool, active_only: bool) -> Result<Vec<Employee>, sqlx::Error> {
        let filter = if active_only { "WHERE is_active = 1" } else { "" };
        let query = format!("SELECT {COLUMNS} FROM employees {filter} ORDER BY nom, prenom");
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    /// Whether an employee row with this id exists.
    pub async fn exists(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM employees WHERE id = ?)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
