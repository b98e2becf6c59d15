use pointage_core::references::ReferencePolicy;

use crate::auth::session::SessionConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite database file (default: `tracking.db`).
    pub database_path: String,
    /// Allowed CORS origins for `/api/*`. `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session signing secret and lifetime.
    pub session: SessionConfig,
    /// Dashboard login accepted by the default credential verifier.
    pub admin: AdminCredentials,
    /// Whether writes must reference an existing employee.
    pub reference_policy: ReferencePolicy,
}

/// The single dashboard account.
#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default        |
    /// |---------------------------------|----------------|
    /// | `HOST`                          | `0.0.0.0`      |
    /// | `PORT`                          | `5000`         |
    /// | `DATABASE_PATH`                 | `tracking.db`  |
    /// | `CORS_ORIGINS`                  | `*`            |
    /// | `REQUEST_TIMEOUT_SECS`          | `30`           |
    /// | `ADMIN_USERNAME`                | `admin`        |
    /// | `ADMIN_PASSWORD`                | `1234`         |
    /// | `ENFORCE_EMPLOYEE_REFERENCES`   | `false`        |
    ///
    /// Session variables are documented on [`SessionConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| "tracking.db".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin = AdminCredentials {
            username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "1234".into()),
        };

        let enforce: bool = std::env::var("ENFORCE_EMPLOYEE_REFERENCES")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("ENFORCE_EMPLOYEE_REFERENCES must be true or false");

        Self {
            host,
            port,
            database_path,
            cors_origins,
            request_timeout_secs,
            session: SessionConfig::from_env(),
            admin,
            reference_policy: ReferencePolicy::from_flag(enforce),
        }
    }
}
