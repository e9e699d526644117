//! Music library handlers.
//!
//! Tracks carry their audio payload as base64 text, so list responses can
//! be large; the frontend player consumes them directly.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use mindwell_core::TrackId;

use crate::db::{MusicRepository, RepositoryError};
use crate::error::{ApiError, Result};
use crate::models::music::{MusicTrack, NewTrack, TrackUpdate};
use crate::state::AppState;

/// List all tracks, newest upload first.
///
/// GET /music
///
/// # Errors
///
/// 500 when the query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<MusicTrack>>> {
    let tracks = MusicRepository::new(state.pool()).list().await?;
    Ok(Json(tracks))
}

/// Read one track.
///
/// GET /music/:id
///
/// # Errors
///
/// 404 when no track has the id.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<TrackId>,
) -> Result<Json<MusicTrack>> {
    let track = MusicRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Track".to_string()))?;

    Ok(Json(track))
}

/// Upload a track.
///
/// POST /music
///
/// # Errors
///
/// 400 when title, artist, or the audio payload is missing.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewTrack>,
) -> Result<(StatusCode, Json<MusicTrack>)> {
    let upload = body
        .normalize()
        .map_err(|field| ApiError::Validation(format!("{field} is required")))?;

    let track = MusicRepository::new(state.pool()).create(&upload).await?;

    tracing::info!(track_id = %track.id, title = %track.title, "Track uploaded");

    Ok((StatusCode::CREATED, Json(track)))
}

/// Update a track.
///
/// PUT /music/:id
///
/// # Errors
///
/// 404 when no track has the id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<TrackId>,
    Json(body): Json<TrackUpdate>,
) -> Result<Json<MusicTrack>> {
    let track = MusicRepository::new(state.pool())
        .update(id, &body)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => ApiError::NotFound("Track".to_string()),
            other => other.into(),
        })?;

    Ok(Json(track))
}

/// Delete response.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

/// Delete a track.
///
/// DELETE /music/:id
///
/// # Errors
///
/// 404 when no track has the id.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<TrackId>,
) -> Result<Json<DeleteResponse>> {
    MusicRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => ApiError::NotFound("Track".to_string()),
            other => other.into(),
        })?;

    Ok(Json(DeleteResponse { ok: true }))
}
