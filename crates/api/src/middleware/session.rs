//! Session-token extraction and the dashboard gate.

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::response::Redirect;

use crate::auth::session::{Principal, SessionState};
use crate::auth::token::{validate_token, SessionClaims};
use crate::routes::pages::LOGIN_PATH;
use crate::state::AppState;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

/// Read the session token from `Authorization: Bearer` or the session cookie.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    bearer.or_else(|| cookie_value(headers, SESSION_COOKIE))
}

/// Find a cookie by name across all `Cookie` headers.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
}

/// `Set-Cookie` value storing `token` for `max_age_secs`.
pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

/// `Set-Cookie` value that deletes the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Resolve the request's session to its claims and principal.
///
/// `None` means the client is anonymous: no token, a token with a bad
/// signature or past its expiry, or a session that was revoked.
pub async fn resolve_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Option<(SessionClaims, Principal)> {
    let token = session_token(headers)?;
    let claims = validate_token(token, &state.config.session).ok()?;
    match state.sessions.state(&claims.sid).await {
        SessionState::Authenticated(principal) => Some((claims, principal)),
        SessionState::Anonymous => None,
    }
}

/// An authenticated dashboard user. Anonymous clients are redirected to
/// the login page.
///
/// ```ignore
/// async fn page(DashboardSession(user): DashboardSession) -> Html<String> { ... }
/// ```
#[derive(Debug, Clone)]
pub struct DashboardSession(pub Principal);

impl FromRequestParts<AppState> for DashboardSession {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match resolve_session(state, &parts.headers).await {
            Some((_, principal)) => Ok(DashboardSession(principal)),
            None => {
                tracing::debug!(path = %parts.uri.path(), "Anonymous dashboard access, redirecting");
                Err(Redirect::to(LOGIN_PATH))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(axum::http::HeaderName, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn reads_cookie_among_others() {
        let h = headers(&[(COOKIE, "theme=dark; session=abc.def; lang=fr")]);
        assert_eq!(session_token(&h), Some("abc.def"));
    }

    #[test]
    fn reads_cookie_from_second_header() {
        let h = headers(&[(COOKIE, "theme=dark"), (COOKIE, "session=tok")]);
        assert_eq!(session_token(&h), Some("tok"));
    }

    #[test]
    fn bearer_takes_precedence() {
        let h = headers(&[(AUTHORIZATION, "Bearer bearer-tok"), (COOKIE, "session=cookie-tok")]);
        assert_eq!(session_token(&h), Some("bearer-tok"));
    }

    #[test]
    fn empty_or_absent_cookie_is_none() {
        assert_eq!(session_token(&headers(&[(COOKIE, "session=")])), None);
        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn cookie_strings() {
        assert_eq!(
            session_cookie("t", 60),
            "session=t; Path=/; HttpOnly; SameSite=Lax; Max-Age=60"
        );
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}
