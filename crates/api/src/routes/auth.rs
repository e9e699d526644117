//! Registration and login handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use mindwell_core::{AccountId, Email, Role};

use crate::error::Result;
use crate::services::AuthService;
use crate::state::AppState;

/// Request body for registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    #[serde(rename = "Status")]
    pub status: &'static str,
    pub message: &'static str,
}

/// Register a new employee account.
///
/// POST /register
///
/// The role is always `employee`; admin accounts come only from seeding.
///
/// # Errors
///
/// 400 for a weak password or malformed email, 409 when the email is
/// already registered.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let auth = AuthService::new(state.pool());
    let account = auth
        .register(&body.name, &body.email, &body.password, Role::Employee)
        .await?;

    tracing::info!(account_id = %account.id, "Account registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            status: "Success",
            message: "User registered successfully!",
        }),
    ))
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for a successful login.
///
/// Carries both `username` and `name` for the two client generations that
/// read different keys.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(rename = "Status")]
    pub status: &'static str,
    #[serde(rename = "userId")]
    pub user_id: AccountId,
    pub role: Role,
    pub username: String,
    pub name: String,
    pub email: Email,
    pub token: String,
}

/// Login with email and password.
///
/// POST /login
///
/// # Errors
///
/// 404 when no account matches the email, 401 when the password is wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let auth = AuthService::new(state.pool());
    let account = auth.login(&body.email, &body.password).await?;
    let token = state.tokens().sign(&account)?;

    tracing::info!(account_id = %account.id, role = %account.role, "Login");

    Ok(Json(LoginResponse {
        status: "Success",
        user_id: account.id,
        role: account.role,
        username: account.name.clone(),
        name: account.name,
        email: account.email,
        token,
    }))
}
