mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

// Every test uses its own variable name so they can run in parallel.

#[tokio::test]
async fn env_returns_set_value() {
    let app = TestApp::spawn().await;
    std::env::set_var("UTILITY_ENV_TEST_SET", "production");

    let response = app
        .post_json(
            "/env",
            &json!({ "var_name": "UTILITY_ENV_TEST_SET", "default": "development" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "var_name": "UTILITY_ENV_TEST_SET", "value": "production" })
    );
}

#[tokio::test]
async fn env_falls_back_to_default() {
    let app = TestApp::spawn().await;
    std::env::remove_var("UTILITY_ENV_TEST_UNSET_DEFAULT");

    let response = app
        .post_json(
            "/env",
            &json!({ "var_name": "UTILITY_ENV_TEST_UNSET_DEFAULT", "default": "fallback" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["value"], "fallback");
}

#[tokio::test]
async fn env_returns_null_when_unset_without_default() {
    let app = TestApp::spawn().await;
    std::env::remove_var("UTILITY_ENV_TEST_UNSET_NULL");

    let response = app
        .post_json("/env", &json!({ "var_name": "UTILITY_ENV_TEST_UNSET_NULL" }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "var_name": "UTILITY_ENV_TEST_UNSET_NULL", "value": null })
    );
}

#[tokio::test]
async fn env_keeps_empty_and_zero_values() {
    let app = TestApp::spawn().await;
    std::env::set_var("UTILITY_ENV_TEST_EMPTY", "");
    std::env::set_var("UTILITY_ENV_TEST_ZERO", "0");

    let response = app
        .post_json(
            "/env",
            &json!({ "var_name": "UTILITY_ENV_TEST_EMPTY", "default": "fallback" }),
        )
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["value"], "");

    let response = app
        .post_json("/env", &json!({ "var_name": "UTILITY_ENV_TEST_ZERO" }))
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["value"], "0");
}

#[tokio::test]
async fn env_rejects_body_without_var_name() {
    let app = TestApp::spawn().await;

    let response = app.post_json("/env", &json!({ "default": "x" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}

#[cfg(unix)]
#[tokio::test]
async fn env_maps_non_unicode_value_to_500() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let app = TestApp::spawn().await;
    std::env::set_var(
        "UTILITY_ENV_TEST_NON_UNICODE",
        OsStr::from_bytes(&[0x66, 0x6f, 0x80]),
    );

    let response = app
        .post_json("/env", &json!({ "var_name": "UTILITY_ENV_TEST_NON_UNICODE" }))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Failed to get env var: "));
}
