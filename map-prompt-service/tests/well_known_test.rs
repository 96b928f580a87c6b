mod common;

use common::TestApp;
use reqwest::{Client, StatusCode};

#[tokio::test]
async fn privacy_policy_is_served_with_cache_headers() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/privacy", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(response.headers()["cache-control"], "public, max-age=3600");

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let policy = &body["privacy_policy"];
    assert!(policy.is_object(), "body: {}", body);
    assert_eq!(
        policy["data_retention"]["storage"],
        "No data is permanently stored"
    );
    assert_eq!(
        policy["data_sharing"]["third_parties"],
        "No data is shared with any third parties"
    );

    let not_collected = policy["data_collection"]["what_we_dont_collect"]
        .as_array()
        .expect("Expected 'what_we_dont_collect' array");
    assert!(not_collected.contains(&serde_json::Value::String(
        "Personal identification information".to_string()
    )));
}

#[tokio::test]
async fn openapi_schema_describes_the_service() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/.well-known/openapi.json", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["info"]["title"], "Map Prompt Builder");
    assert_eq!(body["info"]["version"], env!("CARGO_PKG_VERSION"));
    assert!(
        body["paths"]["/map-prompt"]["post"].is_object(),
        "schema is missing the /map-prompt operation"
    );
    assert_eq!(
        body["servers"][0]["url"],
        "https://map-prompt-builder-production.up.railway.app"
    );
}

#[tokio::test]
async fn swagger_ui_is_mounted() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/docs", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    // The UI redirects to /docs/; reqwest follows it
    assert!(response.status().is_success());
}
