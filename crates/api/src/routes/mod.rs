pub mod alerts;
pub mod auth;
pub mod device;
pub mod employees;
pub mod health;
pub mod pages;
pub mod payments;
pub mod pointages;
pub mod salary;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login                                  login (public)
///
/// /employees                              list, upsert
/// /employees/active                       list active
/// /employees/{id}/position                latest pointage
///
/// /pointages                              list, submit
/// /sync/pointages                         unsynced pointages
/// /movements/{id}                         pointages for one employee
///
/// /salary                                 create
/// /salary/history                         list
///
/// /employee_payments                      employees joined with payments
///
/// /alerts                                 list
/// /alerts/forbidden-zone                  report
///
/// /statistics/zones/{id}                  placeholder zone durations
/// /esp32/status                           placeholder device status
/// /esp32/buzzer                           placeholder buzzer trigger
/// ```
///
/// None of these require a session.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/employees", employees::router())
        .merge(pointages::router())
        .nest("/salary", salary::router())
        .merge(payments::router())
        .nest("/alerts", alerts::router())
        .merge(device::router())
}
