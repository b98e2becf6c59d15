//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. Every value reaches SQL
//! through `bind`; only constant column lists are formatted into queries.

pub mod alert_repo;
pub mod employee_repo;
pub mod payment_repo;
pub mod pointage_repo;
pub mod salary_repo;

pub use alert_repo::AlertRepo;
pub use employee_repo::EmployeeRepo;
pub use payment_repo::PaymentRepo;
pub use pointage_repo::PointageRepo;
pub use salary_repo::SalaryRepo;
