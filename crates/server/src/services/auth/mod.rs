//! Authentication service.
//!
//! Password verification against argon2 hashes plus session lifecycle.
//! Every login failure collapses into a single `InvalidCredentials` error
//! so callers cannot distinguish an unknown email from a wrong password,
//! and the unknown-email path still pays for a hash verification.

mod error;

pub use error::AuthError;

use std::sync::LazyLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use montage_core::Email;
use sqlx::PgPool;

use crate::db::admin_users::AdminUserRepository;
use crate::db::sessions::SessionRepository;
use crate::models::{CurrentAdmin, Session};

/// Hash verified when the email lookup misses, so both failure paths do
/// comparable work.
static DUMMY_HASH: LazyLock<String> = LazyLock::new(|| {
    hash_password("montage-dummy-password").unwrap_or_else(|_| String::new())
});

/// Authentication service.
pub struct AuthService<'a> {
    pool: &'a PgPool,
    admins: AdminUserRepository<'a>,
    sessions: SessionRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            admins: AdminUserRepository::new(pool),
            sessions: SessionRepository::new(pool),
        }
    }

    /// Verify credentials and create a session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for any credential failure,
    /// `AuthError::Repository` if the database fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let user = self.verify_credentials(email, password).await?;
        let session = self.sessions.create(user.id).await?;

        tracing::info!(admin = %user.email, "Admin logged in");

        Ok(session)
    }

    /// Verify an email/password pair against the admin user table.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is malformed or
    /// unknown or the password does not match.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<crate::models::AdminUser, AuthError> {
        let Ok(email) = Email::parse(email) else {
            // Burn a verification anyway; malformed emails should cost the
            // same as wrong passwords.
            let _ = verify_password(password, &DUMMY_HASH);
            return Err(AuthError::InvalidCredentials);
        };

        let Some(user) = self.admins.get_by_email(&email).await? else {
            let _ = verify_password(password, &DUMMY_HASH);
            return Err(AuthError::InvalidCredentials);
        };

        verify_password(password, &user.password_hash)?;

        Ok(user)
    }

    /// Validate a session token and resolve the admin it belongs to.
    ///
    /// Expired sessions are deleted as a side effect of the check.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidSession` when the token is unknown or
    /// expired, `AuthError::Repository` if the database fails.
    pub async fn validate_session(&self, token: &str) -> Result<CurrentAdmin, AuthError> {
        let session = self
            .sessions
            .find_valid(token)
            .await?
            .ok_or(AuthError::InvalidSession)?;

        let email = sqlx::query_scalar::<_, String>("SELECT email FROM admin_user WHERE id = $1")
            .bind(session.user_id)
            .fetch_optional(self.pool)
            .await
            .map_err(crate::db::RepositoryError::from)?
            .ok_or(AuthError::InvalidSession)?;

        Ok(CurrentAdmin {
            id: session.user_id,
            email,
        })
    }

    /// Destroy a session. Idempotent: an absent token is not an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the database fails.
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        self.sessions.delete(token).await?;
        Ok(())
    }
}

/// Hash a password with argon2 and a fresh salt.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` if the hash cannot be parsed or
/// the password does not match.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery staple").expect("hash");
        assert!(verify_password("correct horse battery staple", &hash).is_ok());
        assert!(matches!(
            verify_password("wrong password", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same password").expect("hash");
        let b = hash_password("same password").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
