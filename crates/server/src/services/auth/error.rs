//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials (wrong password, unknown email, or malformed email).
    ///
    /// Deliberately a single variant: the caller must not be able to tell
    /// which check failed.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Session cookie missing, unknown, or expired.
    #[error("invalid session")]
    InvalidSession,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
