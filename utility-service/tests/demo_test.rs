mod common;

use common::TestApp;
use reqwest::StatusCode;

#[tokio::test]
async fn demo_reports_not_set_when_secret_missing() {
    std::env::remove_var("SECRET_PASSWORD");
    let app = TestApp::spawn().await;
    app.mock_ip("198.51.100.42").await;

    let response = app.get("/demo").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Demo of all utility functions");
    assert_eq!(body["math_result"], "increment(1) = 2");
    assert_eq!(body["current_ip"], "198.51.100.42");
    assert_eq!(body["secret_password_preview"], "not_set");
}

#[tokio::test]
async fn demo_previews_first_three_characters_of_secret() {
    std::env::set_var("UTILITY_DEMO_TEST_SECRET", "hunter2");
    let app = TestApp::spawn_with(|config| {
        config.demo.secret_var = "UTILITY_DEMO_TEST_SECRET".to_string();
    })
    .await;
    app.mock_ip("10.0.0.1").await;

    let response = app.get("/demo").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["secret_password_preview"], "hun...");
    assert!(!body.to_string().contains("hunter2"));
}

#[tokio::test]
async fn demo_fails_when_ip_lookup_fails() {
    let app = TestApp::spawn().await;
    app.mock_ip_status(500).await;

    let response = app.get("/demo").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json().await.unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Demo failed: "), "{}", detail);
}
