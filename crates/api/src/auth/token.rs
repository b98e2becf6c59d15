//! Signed session tokens.
//!
//! A token is an HS256 JWT carrying the session id. The signature proves the
//! token was issued by this server; whether the session is still open is
//! decided by the [`SessionStore`](crate::auth::session::SessionStore).

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::session::{Session, SessionConfig};

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject -- the principal's user id.
    pub sub: String,
    /// Session id in the session store.
    pub sid: String,
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Sign a token for `session`.
pub fn issue_token(
    session: &Session,
    config: &SessionConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = SessionClaims {
        sub: session.principal.user_id.clone(),
        sid: session.id.clone(),
        role: session.principal.role.clone(),
        exp: session.expires_at.timestamp(),
        iat: session.created_at.timestamp(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate the signature and expiry of a token and return its claims.
pub fn validate_token(
    token: &str,
    config: &SessionConfig,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
