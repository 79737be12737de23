//! Integration tests for media upload and serving.

use montage_integration_tests::{authenticated_client, base_url};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
#[ignore = "Requires running server and test admin"]
async fn test_upload_roundtrip() {
    let client = authenticated_client().await;
    let base_url = base_url();

    let part = reqwest::multipart::Part::bytes(vec![0xFF, 0xD8, 0xFF, 0xE0])
        .file_name("photo.jpg")
        .mime_str("image/jpeg")
        .expect("valid mime");
    let form = reqwest::multipart::Form::new().part("file", part);

    let resp = client
        .post(format!("{base_url}/api/admin/upload"))
        .multipart(form)
        .send()
        .await
        .expect("Failed to upload");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse upload response");
    let url = body["url"].as_str().expect("url");
    assert!(url.starts_with("/uploads/"));
    assert!(url.ends_with(".jpg"));

    // The stored file serves back with an immutable cache header.
    let resp = reqwest::get(format!("{base_url}{url}"))
        .await
        .expect("Failed to fetch uploaded file");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/jpeg")
    );
    assert_eq!(
        resp.headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok()),
        Some("public, max-age=31536000, immutable")
    );
}

#[tokio::test]
#[ignore = "Requires running server and test admin"]
async fn test_upload_rejects_disallowed_mime() {
    let client = authenticated_client().await;

    let part = reqwest::multipart::Part::bytes(b"<html></html>".to_vec())
        .file_name("page.html")
        .mime_str("text/html")
        .expect("valid mime");
    let form = reqwest::multipart::Form::new().part("file", part);

    let resp = client
        .post(format!("{}/api/admin/upload", base_url()))
        .multipart(form)
        .send()
        .await
        .expect("Failed to upload");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_traversal_path_is_400_and_missing_file_404() {
    let base_url = base_url();

    let resp = reqwest::get(format!("{base_url}/uploads/a/../../etc/passwd"))
        .await
        .expect("Failed to reach server");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = reqwest::get(format!("{base_url}/uploads/no-such-file.jpg"))
        .await
        .expect("Failed to reach server");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
