//! Required-field presence checks for inbound JSON payloads.
//!
//! Handlers check presence before decoding into typed records so that the
//! client gets a message naming the first missing field, in the order the
//! endpoint declares its fields. Types are not checked here.

use serde_json::Value;

use crate::error::CoreError;

/// Required fields for `POST /api/employees`.
pub const EMPLOYEE_FIELDS: &[&str] = &["id", "nom", "prenom", "type"];

/// Required fields for `POST /api/pointages`.
pub const POINTAGE_FIELDS: &[&str] = &["id", "employeeId", "employeeName", "type", "timestamp", "date"];

/// Required fields for `POST /api/salary`.
pub const SALARY_FIELDS: &[&str] = &["employeeId", "employeeName", "type", "amount", "period", "date"];

/// Required fields for `POST /api/alerts/forbidden-zone`.
pub const ALERT_FIELDS: &[&str] = &["employeeId", "employeeName", "zoneName", "timestamp"];

/// Required fields for `POST /api/login`.
pub const LOGIN_FIELDS: &[&str] = &["username", "password"];

/// Return the first field of `required` that is absent from `body`.
///
/// A key that is present with a `null` value counts as present. A body that
/// is not a JSON object is missing every field.
pub fn first_missing<'a>(body: &Value, required: &[&'a str]) -> Option<&'a str> {
    match body.as_object() {
        Some(map) => required.iter().copied().find(|f| !map.contains_key(*f)),
        None => required.first().copied(),
    }
}

/// Fail with [`CoreError::Validation`] naming the first missing field.
pub fn require_fields(body: &Value, required: &[&str]) -> Result<(), CoreError> {
    match first_missing(body, required) {
        Some(field) => Err(CoreError::Validation(format!("Missing field: {field}"))),
        None => Ok(()),
    }
}
