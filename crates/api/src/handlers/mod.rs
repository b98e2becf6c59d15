pub mod alerts;
pub mod auth;
pub mod dashboard;
pub mod device;
pub mod employees;
pub mod payments;
pub mod pointages;
pub mod salary;

use pointage_db::repositories::EmployeeRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// The single place where writes check their `employee_id` reference.
///
/// Under the default permissive policy this performs no query.
pub(crate) async fn check_employee_reference(state: &AppState, employee_id: &str) -> AppResult<()> {
    let policy = state.config.reference_policy;
    if !policy.requires_lookup() {
        return Ok(());
    }
    let exists = EmployeeRepo::exists(&state.pool, employee_id).await?;
    policy.evaluate(employee_id, exists)?;
    Ok(())
}
