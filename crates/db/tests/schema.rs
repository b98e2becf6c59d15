//! Schema setup tests.

use pointage_db::repositories::{EmployeeRepo, PointageRepo, SalaryRepo};
use sqlx::SqlitePool;

mod common;

/// Re-running migrations on an initialized store changes nothing.
#[sqlx::test(migrations = "./migrations")]
async fn migrations_are_idempotent(pool: SqlitePool) {
    EmployeeRepo::upsert(&pool, &common::employee("E1", "Koffi", "Ama"))
        .await
        .unwrap();

    pointage_db::run_migrations(&pool).await.unwrap();
    pointage_db::run_migrations(&pool).await.unwrap();

    let employees = EmployeeRepo::list(&pool, false).await.unwrap();
    assert_eq!(employees.len(), 1);
}

/// A store created before migrations were tracked already has the tables,
/// with enforced-looking foreign keys on `employee_id`. Applying the schema
/// on top of it keeps the existing rows, and a pool from `create_pool` still
/// accepts rows for employees that do not exist.
#[sqlx::test(migrations = false)]
async fn schema_applies_over_untracked_store(pool: SqlitePool) {
    for ddl in [
        "CREATE TABLE employees (
            id TEXT PRIMARY KEY, nom TEXT NOT NULL, prenom TEXT NOT NULL,
            date_naissance TEXT, lieu_naissance TEXT, telephone TEXT, email TEXT,
            profession TEXT, type TEXT NOT NULL, taux_horaire REAL, frais_ecolage REAL,
            qr_code TEXT, is_active INTEGER DEFAULT 1, created_at INTEGER,
            is_synced INTEGER DEFAULT 0
        )",
        "CREATE TABLE pointages (
            id TEXT PRIMARY KEY, employee_id TEXT NOT NULL, employee_name TEXT NOT NULL,
            type TEXT NOT NULL, timestamp INTEGER NOT NULL, date TEXT NOT NULL,
            is_synced INTEGER DEFAULT 0,
            FOREIGN KEY(employee_id) REFERENCES employees(id)
        )",
        "CREATE TABLE salaries (
            id TEXT PRIMARY KEY, employee_id TEXT NOT NULL, employee_name TEXT NOT NULL,
            type TEXT NOT NULL, amount REAL NOT NULL, hours_worked REAL,
            period TEXT NOT NULL, date INTEGER NOT NULL, is_synced INTEGER DEFAULT 0,
            FOREIGN KEY(employee_id) REFERENCES employees(id)
        )",
        "INSERT INTO employees (id, nom, prenom, type, is_active, created_at, is_synced)
         VALUES ('OLD', 'Mensah', 'Kofi', 'salaried', 1, 1, 1)",
    ] {
        sqlx::query(ddl).execute(&pool).await.unwrap();
    }

    let path = pool.connect_options().get_filename().to_path_buf();
    let store = pointage_db::create_pool(path.to_str().unwrap()).await.unwrap();
    pointage_db::run_migrations(&store).await.unwrap();

    let employees = EmployeeRepo::list(&store, false).await.unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].nom, "Mensah");

    let inserted = PointageRepo::insert_or_ignore(&store, &common::pointage("P1", "ghost", 1_000))
        .await
        .unwrap();
    assert!(inserted);
    SalaryRepo::insert(&store, &common::salary("S1", "ghost", 1_000))
        .await
        .unwrap();

    assert_eq!(PointageRepo::list_for_employee(&store, "ghost").await.unwrap().len(), 1);
    assert_eq!(SalaryRepo::history(&store).await.unwrap().len(), 1);
    store.close().await;
}

/// A fresh store created through `create_pool` carries the declared
/// references without enforcing them.
#[sqlx::test(migrations = "./migrations")]
async fn fresh_store_accepts_unknown_employee_references(pool: SqlitePool) {
    let path = pool.connect_options().get_filename().to_path_buf();
    let store = pointage_db::create_pool(path.to_str().unwrap()).await.unwrap();

    PointageRepo::insert_or_ignore(&store, &common::pointage("P1", "ghost", 1_000))
        .await
        .unwrap();
    SalaryRepo::insert(&store, &common::salary("S1", "ghost", 1_000))
        .await
        .unwrap();

    let declared: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM pragma_foreign_key_list('pointages') WHERE \"table\" = 'employees'",
    )
    .fetch_one(&store)
    .await
    .unwrap();
    assert_eq!(declared, 1);
    store.close().await;
}

#[sqlx::test(migrations = "./migrations")]
async fn health_check_succeeds(pool: SqlitePool) {
    assert!(pointage_db::health_check(&pool).await.is_ok());
}
