//! Admin user provisioning command.
//!
//! # Usage
//!
//! ```bash
//! montage-cli admin create -e admin@example.com -p "a long password"
//! ```
//!
//! Creating a user with an email that already exists resets that user's
//! password instead of failing, so the same command recovers a locked-out
//! admin.

use montage_core::Email;
use montage_server::db::admin_users::AdminUserRepository;
use montage_server::services::auth::hash_password;
use sqlx::PgPool;

use super::{CommandError, database_url};

/// Create an admin user, or update the password of an existing one.
///
/// # Errors
///
/// Returns `CommandError` for a malformed email, a hashing failure, or a
/// database error.
pub async fn create_user(email: &str, password: &str) -> Result<i32, CommandError> {
    dotenvy::dotenv().ok();

    let email = Email::parse(email).map_err(|e| CommandError::InvalidEmail(e.to_string()))?;

    let password_hash = hash_password(password).map_err(|_| CommandError::PasswordHash)?;

    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    let user_id = AdminUserRepository::new(&pool)
        .upsert(&email, &password_hash)
        .await
        .map_err(|e| match e {
            montage_server::db::RepositoryError::Database(e) => CommandError::Database(e),
            other => CommandError::Database(sqlx::Error::Protocol(other.to_string())),
        })?;

    tracing::info!("Admin user ready. ID: {}, Email: {}", user_id, email);

    Ok(user_id)
}
