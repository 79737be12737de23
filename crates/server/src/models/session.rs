//! Session-related types.

use chrono::{DateTime, Utc};
use montage_core::AdminUserId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A server-side admin session row.
///
/// The id is the opaque token handed to the browser in the session cookie.
/// A session is valid iff the row exists and `expires_at` is in the future;
/// the TTL is fixed at creation, there is no sliding expiration.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: String,
    pub user_id: AdminUserId,
    pub expires_at: DateTime<Utc>,
}

/// The authenticated admin attached to a request by the auth extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's database ID.
    pub id: AdminUserId,
    /// Admin's email address.
    pub email: String,
}
