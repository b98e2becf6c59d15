//! Domain error type shared by the storage and HTTP crates.

/// Errors raised by domain rules, independent of transport.
///
/// The HTTP layer maps each variant to a status code and an error code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup by id matched nothing, e.g. an employee with no pointages.
    #[error("No {entity} found for {id}")]
    NotFound { entity: &'static str, id: String },

    /// The request is well-formed but violates a domain rule. The message
    /// is shown to the client as is.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Credentials were rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// An unexpected failure; its detail is logged, never returned.
    #[error("Internal error: {0}")]
    Internal(String),
}
