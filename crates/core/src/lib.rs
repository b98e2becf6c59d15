//! Domain primitives shared by the storage and HTTP crates.
//!
//! Nothing here touches the database or the network: errors, type aliases,
//! required-field validation, the employee reference policy, and the date
//! formatting used by the dashboard.

pub mod dates;
pub mod error;
pub mod references;
pub mod types;
pub mod validation;
