//! Music library repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use mindwell_core::TrackId;

use super::RepositoryError;
use crate::models::music::{MusicTrack, NewTrack, TrackUpdate};

/// Database row for a music track.
#[derive(Debug, sqlx::FromRow)]
struct TrackRow {
    id: i32,
    title: String,
    artist: String,
    audio_data: String,
    mime_type: String,
    file_size: String,
    duration: String,
    upload_date: DateTime<Utc>,
}

const TRACK_COLUMNS: &str =
    "id, title, artist, audio_data, mime_type, file_size, duration, upload_date";

impl From<TrackRow> for MusicTrack {
    fn from(row: TrackRow) -> Self {
        Self {
            id: TrackId::new(row.id),
            title: row.title,
            artist: row.artist,
            audio_data: row.audio_data,
            mime_type: row.mime_type,
            file_size: row.file_size,
            duration: row.duration,
            upload_date: row.upload_date,
        }
    }
}

/// Repository for music library operations.
pub struct MusicRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MusicRepository<'a> {
    /// Create a new music repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Store an uploaded track.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, upload: &NewTrack) -> Result<MusicTrack, RepositoryError> {
        let row = sqlx::query_as::<_, TrackRow>(&format!(
            "INSERT INTO music_track (title, artist, audio_data, mime_type, file_size, duration)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {TRACK_COLUMNS}"
        ))
        .bind(&upload.title)
        .bind(&upload.artist)
        .bind(&upload.audio_data)
        .bind(&upload.mime_type)
        .bind(&upload.file_size)
        .bind(&upload.duration)
        .fetch_one(self.pool)
        .await?;

        Ok(MusicTrack::from(row))
    }

    /// List all tracks, newest upload first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<MusicTrack>, RepositoryError> {
        let rows = sqlx::query_as::<_, TrackRow>(&format!(
            "SELECT {TRACK_COLUMNS} FROM music_track ORDER BY upload_date DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(MusicTrack::from).collect())
    }

    /// Get a track by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: TrackId) -> Result<Option<MusicTrack>, RepositoryError> {
        let row = sqlx::query_as::<_, TrackRow>(&format!(
            "SELECT {TRACK_COLUMNS} FROM music_track WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(MusicTrack::from))
    }

    /// Merge the supplied fields into an existing track.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` when no track has the given id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: TrackId,
        update: &TrackUpdate,
    ) -> Result<MusicTrack, RepositoryError> {
        let row = sqlx::query_as::<_, TrackRow>(&format!(
            "UPDATE music_track SET
                title = COALESCE($2, title),
                artist = COALESCE($3, artist),
                audio_data = COALESCE($4, audio_data),
                mime_type = COALESCE($5, mime_type),
                file_size = COALESCE($6, file_size),
                duration = COALESCE($7, duration)
             WHERE id = $1
             RETURNING {TRACK_COLUMNS}"
        ))
        .bind(id)
        .bind(update.title.as_deref())
        .bind(update.artist.as_deref())
        .bind(update.audio_data.as_deref())
        .bind(update.mime_type.as_deref())
        .bind(update.file_size.as_deref())
        .bind(update.duration.as_deref())
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(MusicTrack::from(row))
    }

    /// Delete a track.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` when no track has the given id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: TrackId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM music_track WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
