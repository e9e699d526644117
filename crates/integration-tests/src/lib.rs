//! Integration tests for the MindWell backend.
//!
//! # Running Tests
//!
//! ```bash
//! # Run migrations and start the API
//! cargo run -p mw-cli -- migrate
//! cargo run -p mindwell-api
//!
//! # Run integration tests against it
//! cargo test -p mindwell-integration-tests -- --ignored
//! ```
//!
//! Tests are `#[ignore]`d by default so `cargo test` stays green without a
//! running server. The seeded admin account (`admin@mindwell.com`) is used
//! for admin-gated flows.

use reqwest::Client;
use serde_json::{Value, json};

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("MINDWELL_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Plain HTTP client.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}

/// Login as the seeded admin and return the bearer token.
///
/// # Panics
///
/// Panics when the login request fails or the response has no token.
pub async fn admin_token(client: &Client) -> String {
    let resp = client
        .post(format!("{}/login", base_url()))
        .json(&json!({
            "email": "admin@mindwell.com",
            "password": "Admin123!",
        }))
        .send()
        .await
        .expect("Failed to login as admin");

    assert!(resp.status().is_success(), "admin login failed");
    let body: Value = resp.json().await.expect("Failed to read login body");
    body["token"]
        .as_str()
        .expect("login response missing token")
        .to_string()
}

/// Unique email for a throwaway test account.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{prefix}+{nanos}@example.com")
}
