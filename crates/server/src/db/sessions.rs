//! Admin session repository.
//!
//! Sessions are opaque random tokens stored server-side with a fixed
//! expiry. Expired rows are deleted lazily, on the first validation that
//! finds them stale.

use chrono::{DateTime, Duration, Utc};
use montage_core::AdminUserId;
use rand::RngCore;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::Session;

/// Fixed session lifetime: seven days from creation, no sliding expiration.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Bytes of entropy in a session token (hex-encoded to 64 characters).
const TOKEN_BYTES: usize = 32;

/// Repository for admin session operations.
pub struct SessionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SessionRepository<'a> {
    /// Create a new session repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a session for the given admin with the fixed TTL.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, user_id: AdminUserId) -> Result<Session, RepositoryError> {
        let token = generate_token();
        let expires_at = Utc::now() + Duration::days(SESSION_TTL_DAYS);

        sqlx::query(
            r"
            INSERT INTO session (id, user_id, expires_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(&token)
        .bind(user_id)
        .bind(expires_at)
        .execute(self.pool)
        .await?;

        Ok(Session {
            id: token,
            user_id,
            expires_at,
        })
    }

    /// Look up a session and check its expiry.
    ///
    /// An expired row is deleted as a side effect of the check and reported
    /// as absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn find_valid(&self, token: &str) -> Result<Option<Session>, RepositoryError> {
        let session = sqlx::query_as::<_, Session>(
            r"
            SELECT id, user_id, expires_at
            FROM session
            WHERE id = $1
            ",
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        let Some(session) = session else {
            return Ok(None);
        };

        if session.expires_at <= Utc::now() {
            self.delete(token).await?;
            return Ok(None);
        }

        Ok(Some(session))
    }

    /// Delete a session. Idempotent: an absent token is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, token: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM session WHERE id = $1")
            .bind(token)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}

/// Generate an opaque session token: 32 random bytes, hex-encoded.
fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// The expiry timestamp a session created now would get. Exposed for the
/// cookie builder so the cookie and the row always agree.
#[must_use]
pub fn expiry_from_now() -> DateTime<Utc> {
    Utc::now() + Duration::days(SESSION_TTL_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }

    #[test]
    fn test_ttl_is_seven_days() {
        let expiry = expiry_from_now();
        let delta = expiry - Utc::now();
        assert!(delta <= Duration::days(7));
        assert!(delta > Duration::days(7) - Duration::minutes(1));
    }
}
