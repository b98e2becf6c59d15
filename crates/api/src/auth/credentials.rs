//! Username/password verification behind a trait, so the login handler
//! does not know where accounts come from.

use async_trait::async_trait;
use pointage_core::error::CoreError;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::Principal;

/// Verifies a login attempt.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Return the authenticated principal, or `None` when the pair is
    /// rejected. `Err` is reserved for failures of the check itself.
    async fn verify(&self, username: &str, password: &str) -> Result<Option<Principal>, CoreError>;
}

/// A single configured account whose password is held as an Argon2id hash.
pub struct StaticCredentials {
    username: String,
    password_hash: String,
    principal: Principal,
}

impl StaticCredentials {
    /// The dashboard administrator account (`userId` `ADMIN001`, role `admin`).
    pub fn admin(username: &str, password: &str) -> Result<Self, argon2::password_hash::Error> {
        Ok(Self {
            username: username.to_string(),
            password_hash: hash_password(password)?,
            principal: Principal {
                user_id: "ADMIN001".to_string(),
                role: "admin".to_string(),
            },
        })
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentials {
    async fn verify(&self, username: &str, password: &str) -> Result<Option<Principal>, CoreError> {
        if username != self.username {
            return Ok(None);
        }
        let valid = verify_password(password, &self.password_hash)
            .map_err(|e| CoreError::Internal(format!("Password verification error: {e}")))?;
        Ok(valid.then(|| self.principal.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_exact_pair() {
        let creds = StaticCredentials::admin("admin", "1234").unwrap();
        let principal = creds.verify("admin", "1234").await.unwrap();
        assert_eq!(principal.map(|p| p.user_id), Some("ADMIN001".to_string()));
    }

    #[tokio::test]
    async fn rejects_any_other_pair() {
        let creds = StaticCredentials::admin("admin", "1234").unwrap();
        for (user, pass) in [("admin", "12345"), ("Admin", "1234"), ("root", "1234"), ("", "")] {
            assert!(creds.verify(user, pass).await.unwrap().is_none(), "{user}/{pass}");
        }
    }
}
