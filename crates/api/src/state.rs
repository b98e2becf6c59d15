use std::sync::Arc;

use crate::auth::credentials::{CredentialVerifier, StaticCredentials};
use crate::auth::session::SessionStore;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pointage_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Dashboard sessions keyed by session id.
    pub sessions: Arc<SessionStore>,
    /// Login credential check. Swap the implementation to change how
    /// users authenticate without touching handlers.
    pub credentials: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Build state with the default single-admin credential verifier.
    pub fn new(
        pool: pointage_db::DbPool,
        config: ServerConfig,
    ) -> Result<Self, argon2::password_hash::Error> {
        let credentials =
            StaticCredentials::admin(&config.admin.username, &config.admin.password)?;
        Ok(Self::with_credentials(pool, config, Arc::new(credentials)))
    }

    /// Build state around a caller-supplied credential verifier.
    pub fn with_credentials(
        pool: pointage_db::DbPool,
        config: ServerConfig,
        credentials: Arc<dyn CredentialVerifier>,
    ) -> Self {
        let sessions = Arc::new(SessionStore::new(config.session.ttl()));
        Self {
            pool,
            config: Arc::new(config),
            sessions,
            credentials,
        }
    }
}
