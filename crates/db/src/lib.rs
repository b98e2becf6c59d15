//! SQLite persistence for employees, pointages, salaries and alerts.
//!
//! - [`models`] -- row structs and request DTOs.
//! - [`repositories`] -- zero-sized repositories with parameterized queries.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// How long a writer waits on a locked database file before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const MAX_CONNECTIONS: u32 = 5;

/// Create a connection pool for the database file at `database_path`.
///
/// The file is created when missing. Accepts either a bare path
/// (`tracking.db`) or a `sqlite:` URL.
///
/// Foreign key enforcement is switched off on every connection: the
/// `employee_id` columns are declared as references but rows may point at
/// employees that do not exist.
pub async fn create_pool(database_path: &str) -> Result<DbPool, sqlx::Error> {
    let url = if database_path.starts_with("sqlite:") {
        database_path.to_string()
    } else {
        format!("sqlite:{database_path}")
    };

    let options = SqliteConnectOptions::from_str(&url)?
        .create_if_missing(true)
        .foreign_keys(false)
        .busy_timeout(BUSY_TIMEOUT);

    SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the store is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded schema migrations. Safe to call on every startup.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
