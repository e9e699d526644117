//! Account profile handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use mindwell_core::AccountId;

use crate::db::AccountRepository;
use crate::error::{ApiError, Result};
use crate::models::account::{Account, ProfileUpdate};
use crate::state::AppState;

/// Profile read response.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(rename = "Status")]
    pub status: &'static str,
    pub user: Account,
}

/// Profile update response.
#[derive(Debug, Serialize)]
pub struct ProfileUpdateResponse {
    #[serde(rename = "Status")]
    pub status: &'static str,
    pub message: &'static str,
    pub user: Account,
}

/// Get an account profile. The password hash never appears in the response.
///
/// GET /profile/:id
///
/// # Errors
///
/// 404 when no account has the id.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
) -> Result<Json<ProfileResponse>> {
    let account = AccountRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User".to_string()))?;

    Ok(Json(ProfileResponse {
        status: "Success",
        user: account,
    }))
}

/// Update an account's profile fields.
///
/// PUT /profile/:id
///
/// Only the self-service fields change; email, role, and the password are
/// not reachable through this path.
///
/// # Errors
///
/// 404 when no account has the id.
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
    Json(body): Json<ProfileUpdate>,
) -> Result<Json<ProfileUpdateResponse>> {
    let account = AccountRepository::new(state.pool())
        .update_profile(id, &body)
        .await?
        .ok_or_else(|| ApiError::NotFound("User".to_string()))?;

    Ok(Json(ProfileUpdateResponse {
        status: "Success",
        message: "Profile updated successfully!",
        user: account,
    }))
}
