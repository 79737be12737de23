//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MONTAGE_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//! - `MONTAGE_BASE_URL` - Public URL for the site (e.g., `https://example.com`)
//!
//! ## Optional
//! - `MONTAGE_HOST` - Bind address (default: 127.0.0.1)
//! - `MONTAGE_PORT` - Listen port (default: 3000)
//! - `MONTAGE_UPLOAD_DIR` - Directory for uploaded media (default: `uploads`)
//! - `MONTAGE_MAX_UPLOAD_MB` - Upload size cap in MiB (default: 50)
//! - `MONTAGE_SESSION_COOKIE` - Admin session cookie name (default: `admin_session`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Directory uploaded media is written to and served from
    pub upload_dir: PathBuf,
    /// Upload size cap in bytes
    pub max_upload_bytes: usize,
    /// Name of the admin session cookie
    pub session_cookie: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::load(&|key| std::env::var(key).ok())
    }

    /// Build a config from an environment lookup.
    ///
    /// Kept separate from `from_env` so the error paths are testable without
    /// touching process-global state.
    fn load(env: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = get_database_url(env, "MONTAGE_DATABASE_URL")?;
        let host = get_env_or_default(env, "MONTAGE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MONTAGE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default(env, "MONTAGE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MONTAGE_PORT".to_string(), e.to_string()))?;
        let base_url = env("MONTAGE_BASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("MONTAGE_BASE_URL".to_string()))?;

        let upload_dir = PathBuf::from(get_env_or_default(env, "MONTAGE_UPLOAD_DIR", "uploads"));
        let max_upload_mb = get_env_or_default(env, "MONTAGE_MAX_UPLOAD_MB", "50")
            .parse::<usize>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MONTAGE_MAX_UPLOAD_MB".to_string(), e.to_string())
            })?;

        let session_cookie = get_env_or_default(env, "MONTAGE_SESSION_COOKIE", "admin_session");

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            upload_dir,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            session_cookie,
            sentry_dsn: env("SENTRY_DSN"),
            sentry_environment: env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the site is served over HTTPS (controls the `Secure` cookie flag).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(
    env: &dyn Fn(&str) -> Option<String>,
    primary_key: &str,
) -> Result<SecretString, ConfigError> {
    if let Some(value) = env(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Some(value) = env("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(env: &dyn Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    env(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn test_config() -> SiteConfig {
        SiteConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: 50 * 1024 * 1024,
            session_cookie: "admin_session".to_string(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_is_secure_follows_base_url_scheme() {
        let mut config = test_config();
        assert!(!config.is_secure());
        config.base_url = "https://example.com".to_string();
        assert!(config.is_secure());
    }

    #[test]
    fn test_load_with_defaults() {
        let env = env_from(&[
            ("MONTAGE_DATABASE_URL", "postgres://localhost/montage"),
            ("MONTAGE_BASE_URL", "http://localhost:3000"),
        ]);
        let config = SiteConfig::load(&env).unwrap();
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.session_cookie, "admin_session");
        assert_eq!(config.max_upload_bytes, 50 * 1024 * 1024);
    }

    #[test]
    fn test_missing_database_url_is_reported() {
        let env = env_from(&[("MONTAGE_BASE_URL", "http://localhost:3000")]);
        let err = SiteConfig::load(&env).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(key) if key == "MONTAGE_DATABASE_URL"));
    }

    #[test]
    fn test_generic_database_url_fallback() {
        let env = env_from(&[
            ("DATABASE_URL", "postgres://localhost/montage"),
            ("MONTAGE_BASE_URL", "http://localhost:3000"),
        ]);
        assert!(SiteConfig::load(&env).is_ok());
    }

    #[test]
    fn test_missing_base_url_is_reported() {
        let env = env_from(&[("MONTAGE_DATABASE_URL", "postgres://localhost/montage")]);
        let err = SiteConfig::load(&env).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(key) if key == "MONTAGE_BASE_URL"));
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let env = env_from(&[
            ("MONTAGE_DATABASE_URL", "postgres://localhost/montage"),
            ("MONTAGE_BASE_URL", "http://localhost:3000"),
            ("MONTAGE_HOST", "not-an-ip"),
        ]);
        let err = SiteConfig::load(&env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "MONTAGE_HOST"));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let env = env_from(&[
            ("MONTAGE_DATABASE_URL", "postgres://localhost/montage"),
            ("MONTAGE_BASE_URL", "http://localhost:3000"),
            ("MONTAGE_PORT", "70000"),
        ]);
        let err = SiteConfig::load(&env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "MONTAGE_PORT"));
    }
}
