//! Request extractors.
//!
//! - [`session::DashboardSession`] -- requires an authenticated dashboard session.

pub mod session;
