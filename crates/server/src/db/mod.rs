//! Database operations for the Montage site.
//!
//! # Tables
//!
//! - `admin_user` - Admin credentials (provisioned via `montage-cli admin create`)
//! - `session` - Opaque admin session tokens with server-side expiry
//! - `home_page`, `works_page`, `contacts_page` - Singleton page records (id = 1)
//! - `home_section` - Ordered children of the home page
//! - `work_item` - Ordered children of the works page
//! - `contact_message` - Append-only contact form submissions
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p montage-cli -- migrate
//! ```
//!
//! All queries use the runtime sqlx API (`query_as`/`query_scalar` with
//! `.bind`), so the workspace builds without a live database.

pub mod admin_users;
pub mod contact_messages;
pub mod pages;
pub mod sections;
pub mod sessions;
pub mod works;

pub use pages::PageRepository;
pub use sections::SectionRepository;
pub use works::WorkRepository;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// The fixed identity of every singleton page record.
pub const SINGLETON_ID: i32 = 1;

/// Errors from the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Underlying database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Row not found for the given id.
    #[error("record not found")]
    NotFound,

    /// Unique constraint violated.
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
