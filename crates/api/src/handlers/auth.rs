//! Handlers for dashboard login and logout.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use pointage_core::error::CoreError;
use pointage_core::validation::{require_fields, LOGIN_FIELDS};
use serde::Serialize;
use serde_json::Value;

use crate::auth::token::issue_token;
use crate::error::{AppError, AppResult};
use crate::middleware::session::{clear_session_cookie, resolve_session, session_cookie};
use crate::payload::JsonBody;
use crate::routes::pages::LOGIN_PATH;
use crate::state::AppState;

/// Credentials read from a `POST /api/login` body.
///
/// A value that is not a string cannot match any account, so it makes the
/// whole pair a rejected login rather than a malformed request.
#[derive(Debug)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> LoginRequest<'a> {
    pub fn from_body(body: &'a Value) -> Option<Self> {
        Some(Self {
            username: body.get("username")?.as_str()?,
            password: body.get("password")?.as_str()?,
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    pub user_id: String,
}

/// POST /api/login
///
/// On success opens a session, returns its token in the body and sets it
/// as the `session` cookie. Any rejected pair is a 401 and opens nothing.
pub async fn login(State(state): State<AppState>, JsonBody(body): JsonBody) -> AppResult<Response> {
    require_fields(&body, LOGIN_FIELDS)?;
    let Some(input) = LoginRequest::from_body(&body) else {
        tracing::warn!("Login rejected: credentials are not strings");
        return Err(invalid_credentials());
    };

    let principal = state
        .credentials
        .verify(input.username, input.password)
        .await?
        .ok_or_else(|| {
            tracing::warn!(username = %input.username, "Login rejected");
            invalid_credentials()
        })?;

    let purged = state.sessions.purge_expired().await;
    if purged > 0 {
        let remaining = state.sessions.len().await;
        tracing::debug!(purged, remaining, "Expired sessions purged");
    }

    let session = state.sessions.create(principal).await;
    let token = issue_token(&session, &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = %session.principal.user_id, "Login succeeded");

    let cookie = session_cookie(&token, state.config.session.ttl().num_seconds());
    let body = LoginResponse {
        token,
        role: session.principal.role,
        user_id: session.principal.user_id,
    };
    Ok(([(SET_COOKIE, cookie)], Json(body)).into_response())
}

/// GET /logout
///
/// Ends the caller's session, if any, clears the cookie and redirects to
/// the login page.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some((claims, principal)) = resolve_session(&state, &headers).await {
        state.sessions.revoke(&claims.sid).await;
        tracing::info!(user_id = %principal.user_id, "Logged out");
    }
    ([(SET_COOKIE, clear_session_cookie())], Redirect::to(LOGIN_PATH)).into_response()
}
