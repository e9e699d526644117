//! Integration tests for registration and login.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p mindwell-api)
//!
//! Run with: cargo test -p mindwell-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use mindwell_integration_tests::{base_url, client, unique_email};

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_register_then_login() {
    let client = client();
    let email = unique_email("register");

    let resp = client
        .post(format!("{}/register", base_url()))
        .json(&json!({
            "name": "Test User",
            "email": email,
            "password": "a-decent-password",
        }))
        .send()
        .await
        .expect("register request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("register body");
    assert_eq!(body["Status"], "Success");

    let resp = client
        .post(format!("{}/login", base_url()))
        .json(&json!({
            "email": email,
            "password": "a-decent-password",
        }))
        .send()
        .await
        .expect("login request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("login body");
    assert_eq!(body["Status"], "Success");
    assert_eq!(body["role"], "employee");
    assert_eq!(body["name"], "Test User");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_register_accepts_short_password() {
    let client = client();
    let email = unique_email("shortpw");

    let resp = client
        .post(format!("{}/register", base_url()))
        .json(&json!({
            "name": "Test User",
            "email": email,
            "password": "p1",
        }))
        .send()
        .await
        .expect("register request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .post(format!("{}/login", base_url()))
        .json(&json!({
            "email": email,
            "password": "p1",
        }))
        .send()
        .await
        .expect("login request failed");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_register_duplicate_email_conflicts() {
    let client = client();
    let email = unique_email("duplicate");
    let payload = json!({
        "name": "Test User",
        "email": email,
        "password": "a-decent-password",
    });

    let first = client
        .post(format!("{}/register", base_url()))
        .json(&payload)
        .send()
        .await
        .expect("first register failed");
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = client
        .post(format!("{}/register", base_url()))
        .json(&payload)
        .send()
        .await
        .expect("second register failed");
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body: Value = second.json().await.expect("conflict body");
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_register_uppercase_email_conflicts_with_lowercase() {
    let client = client();
    let email = unique_email("case");

    let first = client
        .post(format!("{}/register", base_url()))
        .json(&json!({
            "name": "Test User",
            "email": email,
            "password": "a-decent-password",
        }))
        .send()
        .await
        .expect("first register failed");
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = client
        .post(format!("{}/register", base_url()))
        .json(&json!({
            "name": "Test User",
            "email": email.to_uppercase(),
            "password": "a-decent-password",
        }))
        .send()
        .await
        .expect("second register failed");
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_login_unknown_email_is_404() {
    let client = client();

    let resp = client
        .post(format!("{}/login", base_url()))
        .json(&json!({
            "email": unique_email("missing"),
            "password": "whatever-password",
        }))
        .send()
        .await
        .expect("login request failed");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("body");
    assert_eq!(body["message"], "No record existed");
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_login_wrong_password_is_401() {
    let client = client();
    let email = unique_email("wrongpw");

    client
        .post(format!("{}/register", base_url()))
        .json(&json!({
            "name": "Test User",
            "email": email,
            "password": "a-decent-password",
        }))
        .send()
        .await
        .expect("register failed");

    let resp = client
        .post(format!("{}/login", base_url()))
        .json(&json!({
            "email": email,
            "password": "not-the-password",
        }))
        .send()
        .await
        .expect("login request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("body");
    assert_eq!(body["message"], "Incorrect Password");
}
