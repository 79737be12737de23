//! Integration tests for Montage.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply migrations
//! cargo run -p montage-cli -- migrate
//!
//! # Provision the admin the tests log in as
//! cargo run -p montage-cli -- admin create -e admin@example.com -p test-password
//!
//! # Start the server, then run the ignored tests
//! cargo test -p montage-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `MONTAGE_TEST_URL` - Base URL of the running server (default `http://localhost:3000`)
//! - `MONTAGE_TEST_EMAIL` / `MONTAGE_TEST_PASSWORD` - Admin credentials
//! - `MONTAGE_TEST_DATABASE_URL` - Connection string for tests that inspect
//!   the database directly (falls back to `MONTAGE_DATABASE_URL`, then
//!   `DATABASE_URL`)

use reqwest::Client;
use serde_json::json;
use sqlx::PgPool;

/// Base URL of the server under test.
#[must_use]
pub fn base_url() -> String {
    std::env::var("MONTAGE_TEST_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Name of the admin session cookie the server under test uses.
#[must_use]
pub fn session_cookie_name() -> String {
    std::env::var("MONTAGE_SESSION_COOKIE").unwrap_or_else(|_| "admin_session".to_string())
}

/// Connect to the database the server under test is backed by.
///
/// # Panics
///
/// Panics if no database URL is configured or the connection fails.
pub async fn database_pool() -> PgPool {
    let url = std::env::var("MONTAGE_TEST_DATABASE_URL")
        .or_else(|_| std::env::var("MONTAGE_DATABASE_URL"))
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("No test database URL configured");

    PgPool::connect(&url)
        .await
        .expect("Failed to connect to the test database")
}

/// Admin credentials the tests use.
#[must_use]
pub fn admin_credentials() -> (String, String) {
    let email =
        std::env::var("MONTAGE_TEST_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());
    let password =
        std::env::var("MONTAGE_TEST_PASSWORD").unwrap_or_else(|_| "test-password".to_string());
    (email, password)
}

/// Build a cookie-holding client and log in as the test admin.
///
/// # Panics
///
/// Panics if the server is unreachable or the login is rejected; both mean
/// the environment is not set up for integration tests.
pub async fn authenticated_client() -> Client {
    let client = Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client");

    let (email, password) = admin_credentials();
    let resp = client
        .post(format!("{}/api/admin/login", base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to reach server");

    assert!(
        resp.status().is_success(),
        "Login failed; provision the test admin first"
    );

    client
}
