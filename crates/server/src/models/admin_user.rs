//! Admin user accounts.

use chrono::{DateTime, Utc};
use montage_core::AdminUserId;
use sqlx::FromRow;

/// An admin account, provisioned out-of-band via the CLI.
///
/// Never serialized to clients: the password hash stays server-side.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: AdminUserId,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
