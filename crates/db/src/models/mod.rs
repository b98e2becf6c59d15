//! Row models and request DTOs, one module per table.
//!
//! Row structs serialize with camelCase keys, which is the wire shape the
//! mobile clients read and write.

pub mod alert;
pub mod employee;
pub mod payment;
pub mod pointage;
pub mod salary;
