//! Counselor directory handlers.
//!
//! Reads are public; mutations require an admin bearer token.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use mindwell_core::CounselorId;

use crate::db::counselors::{CounselorChanges, CounselorFilter, CounselorRepository};
use crate::db::RepositoryError;
use crate::error::{ApiError, Result};
use crate::middleware::RequireAdmin;
use crate::models::counselor::{Counselor, CounselorPayload, StringList};
use crate::state::AppState;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 12;

/// Query parameters for the public directory listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    pub min_rating: Option<i32>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
}

/// Directory listing page.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub page: i64,
    pub total: i64,
    pub items: Vec<Counselor>,
}

/// List active counselors with filters and pagination.
///
/// GET /counselors
///
/// # Errors
///
/// 500 when the query fails.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>> {
    let filter = CounselorFilter {
        q: query.q,
        category: query.category,
        language: query.language,
        min_rating: query.min_rating,
    };
    let page = query.page.unwrap_or(DEFAULT_PAGE).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let (items, total) = CounselorRepository::new(state.pool())
        .list(&filter, page, limit, query.sort.as_deref())
        .await?;

    Ok(Json(ListResponse { page, total, items }))
}

/// Read one counselor.
///
/// GET /counselors/:id
///
/// # Errors
///
/// 404 when no counselor has the id.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<CounselorId>,
) -> Result<Json<Counselor>> {
    let counselor = CounselorRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Counselor".to_string()))?;

    Ok(Json(counselor))
}

/// Create a counselor (admin).
///
/// POST /counselors
///
/// Accepts both the canonical payload and the legacy spelling (free-text
/// `experience`, `image`, comma-separated list fields).
///
/// # Errors
///
/// 400 when name or category is missing or the rating is out of range,
/// 401/403 without an admin token.
pub async fn create(
    RequireAdmin(_claims): RequireAdmin,
    State(state): State<AppState>,
    Json(payload): Json<CounselorPayload>,
) -> Result<(StatusCode, Json<Counselor>)> {
    let (name, category) = payload
        .require_create_fields()
        .map_err(|field| ApiError::Validation(format!("{field} is required")))?;
    let changes = changes_from(payload)?;

    let counselor = CounselorRepository::new(state.pool())
        .create(&name, &category, &changes)
        .await?;

    tracing::info!(counselor_id = %counselor.id, name = %counselor.name, "Counselor created");

    Ok((StatusCode::CREATED, Json(counselor)))
}

/// Update a counselor (admin).
///
/// PATCH /counselors/:id
///
/// # Errors
///
/// 400 when the rating is out of range, 404 when no counselor has the id,
/// 401/403 without an admin token.
pub async fn update(
    RequireAdmin(_claims): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<CounselorId>,
    Json(payload): Json<CounselorPayload>,
) -> Result<Json<Counselor>> {
    let changes = changes_from(payload)?;

    let counselor = CounselorRepository::new(state.pool())
        .update(id, &changes)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => ApiError::NotFound("Counselor".to_string()),
            other => other.into(),
        })?;

    Ok(Json(counselor))
}

/// Delete response.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

/// Delete a counselor (admin).
///
/// DELETE /counselors/:id
///
/// # Errors
///
/// 404 when no counselor has the id, 401/403 without an admin token.
pub async fn remove(
    RequireAdmin(_claims): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<CounselorId>,
) -> Result<Json<DeleteResponse>> {
    CounselorRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => ApiError::NotFound("Counselor".to_string()),
            other => other.into(),
        })?;

    Ok(Json(DeleteResponse { ok: true }))
}

/// Adapt an API payload into repository changes, resolving legacy fields.
fn changes_from(payload: CounselorPayload) -> Result<CounselorChanges> {
    let rating = payload
        .resolved_rating()
        .map_err(|msg| ApiError::Validation(msg.to_string()))?;

    Ok(CounselorChanges {
        experience_years: payload.resolved_experience_years(),
        rating,
        image_url: payload.resolved_image_url(),
        name: payload.name,
        category: payload.category,
        languages: payload.languages.map(StringList::normalize),
        approach: payload.approach.map(StringList::normalize),
        quote: payload.quote,
        is_active: payload.is_active,
    })
}
