//! Contact message repository.
//!
//! Append-only: messages are inserted by the public contact form and read
//! out-of-band (database access); there is no admin surface for them.

use sqlx::PgPool;

use super::RepositoryError;

/// A contact form submission with request-derived metadata.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

/// Insert a contact message.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn insert(pool: &PgPool, msg: &NewContactMessage) -> Result<(), RepositoryError> {
    sqlx::query(
        r"
        INSERT INTO contact_message (name, email, message, ip, user_agent)
        VALUES ($1, $2, $3, $4, $5)
        ",
    )
    .bind(&msg.name)
    .bind(&msg.email)
    .bind(&msg.message)
    .bind(msg.ip.as_deref())
    .bind(msg.user_agent.as_deref())
    .execute(pool)
    .await?;

    Ok(())
}
