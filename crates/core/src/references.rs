//! Policy for the soft `employee_id` references on pointages and salaries.
//!
//! Rows carry a caller-supplied employee id and a denormalized name. The
//! store does not enforce the reference. This policy is the one switch that
//! turns enforcement on at write time.

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferencePolicy {
    /// Accept any employee id (historical behaviour).
    #[default]
    Permissive,
    /// Reject writes whose employee id has no matching employee row.
    Enforce,
}

impl ReferencePolicy {
    pub fn from_flag(enforce: bool) -> Self {
        if enforce {
            Self::Enforce
        } else {
            Self::Permissive
        }
    }

    /// Whether the caller has to look the employee up before writing.
    pub fn requires_lookup(self) -> bool {
        self == Self::Enforce
    }

    /// Decide a write given whether the referenced employee exists.
    pub fn evaluate(self, employee_id: &str, exists: bool) -> Result<(), CoreError> {
        match self {
            Self::Permissive => Ok(()),
            Self::Enforce if exists => Ok(()),
            Self::Enforce => Err(CoreError::Validation(format!(
                "Unknown employee: {employee_id}"
            ))),
        }
    }
}
