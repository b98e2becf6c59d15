//! Decoding of JSON request bodies with required-field checks.

use axum::extract::FromRequest;
use pointage_core::validation::require_fields;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// An untyped JSON request body.
///
/// A malformed body or a missing `Content-Type: application/json` is
/// rejected with the JSON error envelope.
#[derive(Debug, Deserialize, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody(pub Value);

/// Check `required` fields for presence, then decode `body` into `T`.
///
/// A missing field yields a 400 naming it. A present field with the wrong
/// type yields a 400 carrying the decoder's message.
pub fn decode<T: DeserializeOwned>(body: Value, required: &[&str]) -> AppResult<T> {
    require_fields(&body, required)?;
    serde_json::from_value(body).map_err(|e| AppError::BadRequest(format!("Invalid payload: {e}")))
}
