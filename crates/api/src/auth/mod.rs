//! Authentication primitives for the dashboard session gate.
//!
//! - [`credentials`] -- pluggable username/password verification.
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`session`] -- in-memory session store with expiry.
//! - [`token`] -- signed session tokens handed to clients.

pub mod credentials;
pub mod password;
pub mod session;
pub mod token;
