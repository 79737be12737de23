//! Integration tests for admin authentication.
//!
//! These tests require a running server and a provisioned test admin; see
//! the crate docs for setup.

use montage_integration_tests::{
    admin_credentials, authenticated_client, base_url, database_pool, session_cookie_name,
};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

#[tokio::test]
#[ignore = "Requires running server and test admin"]
async fn test_login_logout_flow() {
    let client = authenticated_client().await;
    let base_url = base_url();

    // The session cookie should open the admin API.
    let resp = client
        .get(format!("{base_url}/api/admin/home"))
        .send()
        .await
        .expect("Failed to fetch admin home");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse body");
    assert!(body.get("page").is_some());
    assert!(body.get("sections").is_some());

    // Logout invalidates the session server-side.
    let resp = client
        .post(format!("{base_url}/api/admin/logout"))
        .send()
        .await
        .expect("Failed to logout");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/api/admin/home"))
        .send()
        .await
        .expect("Failed to fetch admin home");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database access"]
async fn test_expired_session_rejected_and_removed() {
    let client = Client::new();
    let (email, password) = admin_credentials();
    let base_url = base_url();
    let cookie_name = session_cookie_name();

    let resp = client
        .post(format!("{base_url}/api/admin/login"))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to reach server");
    assert!(resp.status().is_success(), "Login failed");

    let token = resp
        .cookies()
        .find(|c| c.name() == cookie_name)
        .map(|c| c.value().to_string())
        .expect("Login did not set a session cookie");

    // Age the session past its expiry, then present it again.
    let pool = database_pool().await;
    sqlx::query("UPDATE session SET expires_at = NOW() - INTERVAL '1 hour' WHERE id = $1")
        .bind(&token)
        .execute(&pool)
        .await
        .expect("Failed to backdate session");

    let resp = client
        .get(format!("{base_url}/api/admin/home"))
        .header("cookie", format!("{cookie_name}={token}"))
        .send()
        .await
        .expect("Failed to reach server");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // The stale row is deleted by the validation that rejected it.
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM session WHERE id = $1")
        .bind(&token)
        .fetch_one(&pool)
        .await
        .expect("Failed to count sessions");
    assert_eq!(remaining, 0);
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_wrong_password_is_generic_401() {
    let client = Client::new();
    let (email, _) = admin_credentials();

    let resp = client
        .post(format!("{}/api/admin/login", base_url()))
        .json(&json!({ "email": email, "password": "definitely wrong" }))
        .send()
        .await
        .expect("Failed to reach server");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Unknown email produces an identical response.
    let resp = client
        .post(format!("{}/api/admin/login", base_url()))
        .json(&json!({ "email": "nobody@example.com", "password": "whatever" }))
        .send()
        .await
        .expect("Failed to reach server");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_missing_fields_reject_400() {
    let resp = Client::new()
        .post(format!("{}/api/admin/login", base_url()))
        .json(&json!({ "email": "admin@example.com" }))
        .send()
        .await
        .expect("Failed to reach server");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_unauthenticated_api_is_401_and_page_redirects() {
    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create client");
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/api/admin/works"))
        .send()
        .await
        .expect("Failed to reach server");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .get(format!("{base_url}/admin"))
        .send()
        .await
        .expect("Failed to reach server");
    assert!(resp.status().is_redirection());
    assert_eq!(
        resp.headers()
            .get("location")
            .and_then(|v| v.to_str().ok()),
        Some("/admin/login")
    );
}
