//! Employee/salary join rows used by the payment listing and the dashboard.

use pointage_core::types::EpochMillis;
use serde::Serialize;
use sqlx::FromRow;

/// Which join shape to use between active employees and their salaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentJoin {
    /// Every active employee, with null payment columns when unpaid.
    Left,
    /// Only active employees that have at least one salary row.
    Inner,
}

/// One employee/payment pair. Payment columns are `None` for an employee
/// without salary rows under [`PaymentJoin::Left`].
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayment {
    pub nom: String,
    pub prenom: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub employee_name: Option<String>,
    pub payment_type: Option<String>,
    pub amount: Option<f64>,
    pub period: Option<String>,
    pub date: Option<EpochMillis>,
}
