//! Read-only join of active employees against their salary records.

use sqlx::SqlitePool;

use crate::models::payment::{EmployeePayment, PaymentJoin};

const LEFT_JOIN: &str = "SELECT e.nom, e.prenom, e.type, s.employee_name, s.type AS payment_type,
                                s.amount, s.period, s.date
                         FROM employees e
                         LEFT JOIN salaries s ON e.id = s.employee_id
                         WHERE e.is_active = 1
                         ORDER BY s.date DESC";

const INNER_JOIN: &str = "SELECT e.nom, e.prenom, e.type, s.employee_name, s.type AS payment_type,
                                 s.amount, s.period, s.date
                          FROM salaries s
                          INNER JOIN employees e ON e.id = s.employee_id
                          WHERE e.is_active = 1
                          ORDER BY s.date DESC";

pub struct PaymentRepo;

impl PaymentRepo {
    /// Active employees paired with their payments, most recent first.
    ///
    /// Under [`PaymentJoin::Left`] unpaid employees appear once with null
    /// payment columns; SQLite sorts those rows last.
    pub async fn employee_payments(
        pool: &SqlitePool,
        join: PaymentJoin,
    ) -> Result<Vec<EmployeePayment>, sqlx::Error> {
        let query = match join {
            PaymentJoin::Left => LEFT_JOIN,
            PaymentJoin::Inner => INNER_JOIN,
        };
        sqlx::query_as::<_, EmployeePayment>(query).fetch_all(pool).await
    }
}
