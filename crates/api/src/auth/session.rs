//! Dashboard sessions.
//!
//! A client is `Anonymous` until a successful login creates a session for
//! it, and becomes `Anonymous` again on logout or once the session expires.
//! Sessions live in memory; restarting the server logs everyone out.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Default session lifetime in minutes (24 hours).
const DEFAULT_TTL_MINS: i64 = 24 * 60;

/// Session signing and lifetime configuration.
#[derive(Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign session tokens.
    pub secret: String,
    /// Session lifetime in minutes.
    pub ttl_mins: i64,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("ttl_mins", &self.ttl_mins)
            .finish()
    }
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var            | Default                        |
    /// |--------------------|--------------------------------|
    /// | `SECRET_KEY`       | random, regenerated per start  |
    /// | `SESSION_TTL_MINS` | `1440`                         |
    pub fn from_env() -> Self {
        let secret = match std::env::var("SECRET_KEY") {
            Ok(s) if !s.is_empty() => s,
            _ => {
                tracing::warn!("SECRET_KEY not set, generating a per-process secret");
                generate_secret()
            }
        };

        let ttl_mins: i64 = std::env::var("SESSION_TTL_MINS")
            .unwrap_or_else(|_| DEFAULT_TTL_MINS.to_string())
            .parse()
            .expect("SESSION_TTL_MINS must be a valid i64");

        Self { secret, ttl_mins }
    }

    pub fn ttl(&self) -> Duration {
        Duration::minutes(self.ttl_mins)
    }
}

/// Three v4 UUIDs rendered as hex.
fn generate_secret() -> String {
    (0..3).map(|_| Uuid::new_v4().simple().to_string()).collect()
}

/// Who a session belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: String,
    pub role: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub principal: Principal,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

/// Gate state of a client holding (or not holding) a session id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(Principal),
}

/// Session id -> session mapping with expiry.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Open a new session for `principal`.
    pub async fn create(&self, principal: Principal) -> Session {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4().to_string(),
            principal,
            created_at: now,
            expires_at: now + self.ttl,
        };
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session.clone());
        session
    }

    /// Resolve a session id to its gate state.
    pub async fn state(&self, session_id: &str) -> SessionState {
        self.state_at(session_id, Utc::now()).await
    }

    /// Resolve a session id as of `now`. An expired session is dropped.
    pub async fn state_at(&self, session_id: &str, now: DateTime<Utc>) -> SessionState {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(session_id) {
                Some(session) if session.is_live_at(now) => {
                    return SessionState::Authenticated(session.principal.clone());
                }
                Some(_) => {}
                None => return SessionState::Anonymous,
            }
        }
        self.sessions.write().await.remove(session_id);
        SessionState::Anonymous
    }

    /// End a session. Returns `true` if it existed.
    pub async fn revoke(&self, session_id: &str) -> bool {
        self.sessions.write().await.remove(session_id).is_some()
    }

    /// Drop every expired session. Returns the count removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.is_live_at(now));
        before - sessions.len()
    }

    /// Number of stored sessions, expired ones included until purged.
    pub(crate) async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
