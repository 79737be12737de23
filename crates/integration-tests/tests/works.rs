//! Integration tests for work item management: create, slug assignment,
//! partial update, reorder, delete.

use montage_integration_tests::{authenticated_client, base_url};
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn create_work(client: &reqwest::Client, title: &str) -> Value {
    let resp = client
        .post(format!("{}/api/admin/works", base_url()))
        .json(&json!({
            "title": title,
            "provider": "YOUTUBE",
            "videoUrl": "https://youtu.be/abc123",
            "published": true
        }))
        .send()
        .await
        .expect("Failed to create work");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to parse created work")
}

async fn delete_work(client: &reqwest::Client, id: i64) {
    let _ = client
        .delete(format!("{}/api/admin/works/{id}", base_url()))
        .send()
        .await;
}

#[tokio::test]
#[ignore = "Requires running server and test admin"]
async fn test_create_assigns_slug_and_suffixes_collisions() {
    let client = authenticated_client().await;

    let first = create_work(&client, "Slug Collision Test!").await;
    let second = create_work(&client, "Slug Collision Test!").await;

    let first_slug = first["slug"].as_str().expect("slug");
    let second_slug = second["slug"].as_str().expect("slug");

    assert_eq!(first_slug, "slug-collision-test");
    assert_eq!(second_slug, "slug-collision-test-1");

    delete_work(&client, first["id"].as_i64().expect("id")).await;
    delete_work(&client, second["id"].as_i64().expect("id")).await;
}

#[tokio::test]
#[ignore = "Requires running server and test admin"]
async fn test_partial_update_leaves_other_fields() {
    let client = authenticated_client().await;

    let work = create_work(&client, "Patch Target").await;
    let id = work["id"].as_i64().expect("id");

    let resp = client
        .patch(format!("{}/api/admin/works/{id}", base_url()))
        .json(&json!({ "published": false }))
        .send()
        .await
        .expect("Failed to patch work");
    assert_eq!(resp.status(), StatusCode::OK);

    let patched: Value = resp.json().await.expect("Failed to parse patched work");
    assert_eq!(patched["published"], json!(false));
    assert_eq!(patched["title"], work["title"]);
    assert_eq!(patched["videoUrl"], work["videoUrl"]);

    // An empty patch is a 400.
    let resp = client
        .patch(format!("{}/api/admin/works/{id}", base_url()))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send empty patch");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    delete_work(&client, id).await;
}

#[tokio::test]
#[ignore = "Requires running server and test admin"]
async fn test_reorder_swaps_neighbors_and_noops_at_boundary() {
    let client = authenticated_client().await;
    let base_url = base_url();

    let a = create_work(&client, "Reorder A").await;
    let b = create_work(&client, "Reorder B").await;
    let a_id = a["id"].as_i64().expect("id");
    let b_id = b["id"].as_i64().expect("id");

    // B sits after A; moving it up swaps them.
    let resp = client
        .post(format!("{base_url}/api/admin/works/{b_id}/move"))
        .json(&json!({ "direction": "up" }))
        .send()
        .await
        .expect("Failed to move work");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse move response");
    assert_eq!(body["moved"], json!(true));

    let listing: Value = client
        .get(format!("{base_url}/api/admin/works"))
        .send()
        .await
        .expect("Failed to list works")
        .json()
        .await
        .expect("Failed to parse listing");
    let ids: Vec<i64> = listing["works"]
        .as_array()
        .expect("works array")
        .iter()
        .filter_map(|w| w["id"].as_i64())
        .filter(|id| *id == a_id || *id == b_id)
        .collect();
    assert_eq!(ids, vec![b_id, a_id]);

    // Moving the first item further up is a successful no-op.
    let resp = client
        .post(format!("{base_url}/api/admin/works/{b_id}/move"))
        .json(&json!({ "direction": "up" }))
        .send()
        .await
        .expect("Failed to move work");
    assert_eq!(resp.status(), StatusCode::OK);

    delete_work(&client, a_id).await;
    delete_work(&client, b_id).await;
}

#[tokio::test]
#[ignore = "Requires running server and test admin"]
async fn test_unpublished_items_hidden_from_public_page() {
    let client = authenticated_client().await;
    let base_url = base_url();

    let work = create_work(&client, "Hidden Draft Work").await;
    let id = work["id"].as_i64().expect("id");

    let resp = client
        .patch(format!("{base_url}/api/admin/works/{id}"))
        .json(&json!({ "published": false }))
        .send()
        .await
        .expect("Failed to unpublish");
    assert_eq!(resp.status(), StatusCode::OK);

    let page = reqwest::get(format!("{base_url}/works"))
        .await
        .expect("Failed to fetch works page")
        .text()
        .await
        .expect("Failed to read works page");
    assert!(!page.contains("Hidden Draft Work"));

    delete_work(&client, id).await;
}
