//! CLI command implementations.

pub mod admin;
pub mod migrate;

use thiserror::Error;

/// Errors shared by the CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection or query error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Invalid email address.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Password hashing failed.
    #[error("Failed to hash password")]
    PasswordHash,
}

/// Resolve the database URL from `MONTAGE_DATABASE_URL`, falling back to
/// `DATABASE_URL`.
pub(crate) fn database_url() -> Result<String, CommandError> {
    std::env::var("MONTAGE_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| CommandError::MissingEnvVar("MONTAGE_DATABASE_URL"))
}
