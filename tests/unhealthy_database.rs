//! Endpoint behaviour when the database is unreachable

mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn env_test_does_not_need_the_database() {
    let server = common::start_without_database().await;

    let response = reqwest::get(server.url("/api/env-test")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert!(body["environment"].is_object());
}

#[tokio::test]
async fn diagnostics_report_500_envelopes() {
    let server = common::start_without_database().await;
    let client = reqwest::Client::new();

    for (method, path) in [
        ("GET", "/api/test-db"),
        ("GET", "/api/admin/contests/test"),
        ("POST", "/api/admin/setup-demo-user"),
    ] {
        let request = match method {
            "POST" => client.post(server.url(path)),
            _ => client.get(server.url(path)),
        };
        let response = request.send().await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{path}");

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], false, "{path}");
        assert!(body["error"].is_string(), "{path}");
        assert!(body["message"].is_string(), "{path}");
    }
}
