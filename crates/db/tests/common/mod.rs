//! Row builders shared by the repository tests.

#![allow(dead_code)]

use pointage_db::models::employee::Employee;
use pointage_db::models::pointage::Pointage;
use pointage_db::models::salary::SalaryRecord;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// A second pool over the test database with foreign key enforcement off,
/// the way `create_pool` opens production stores.
pub fn soft_pool(pool: &SqlitePool) -> SqlitePool {
    let options = (*pool.connect_options()).clone().foreign_keys(false);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_lazy_with(options)
}

pub fn employee(id: &str, nom: &str, prenom: &str) -> Employee {
    Employee {
        id: id.to_string(),
        nom: nom.to_string(),
        prenom: prenom.to_string(),
        date_naissance: None,
        lieu_naissance: None,
        telephone: None,
        email: None,
        profession: None,
        kind: "hourly".to_string(),
        taux_horaire: Some(1500.0),
        frais_ecolage: None,
        qr_code: None,
        is_active: true,
        created_at: 1_700_000_000_000,
        is_synced: true,
    }
}

pub fn pointage(id: &str, employee_id: &str, timestamp: i64) -> Pointage {
    Pointage {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        employee_name: format!("Employee {employee_id}"),
        kind: "ARRIVEE".to_string(),
        timestamp,
        date: "2024-03-05".to_string(),
        is_synced: true,
    }
}

pub fn salary(id: &str, employee_id: &str, date: i64) -> SalaryRecord {
    SalaryRecord {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        employee_name: format!("Employee {employee_id}"),
        kind: "salaire".to_string(),
        amount: 100_000.0,
        hours_worked: Some(160.0),
        period: "2024-03".to_string(),
        date,
        is_synced: false,
    }
}
