//! Music library domain types.
//!
//! Tracks are stored with the audio payload embedded as base64 text, the
//! way the upload form ships them. Sizes and durations are display strings
//! computed client-side; the server stores them verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mindwell_core::TrackId;

/// A track in the relaxation music library (domain type).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicTrack {
    /// Unique track ID.
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    /// Base64-encoded audio payload.
    pub audio_data: String,
    pub mime_type: String,
    pub file_size: String,
    pub duration: String,
    pub upload_date: DateTime<Utc>,
}

/// Payload for uploading a track. Title, artist, and audio are required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrack {
    pub title: String,
    pub artist: String,
    pub audio_data: String,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
    #[serde(default = "default_display")]
    pub file_size: String,
    #[serde(default = "default_display")]
    pub duration: String,
}

fn default_mime_type() -> String {
    "audio/mpeg".to_string()
}

fn default_display() -> String {
    "Unknown".to_string()
}

impl NewTrack {
    /// Trim metadata fields and check required ones are non-empty.
    ///
    /// # Errors
    ///
    /// Returns the name of the first empty required field.
    pub fn normalize(mut self) -> Result<Self, &'static str> {
        self.title = self.title.trim().to_string();
        self.artist = self.artist.trim().to_string();

        if self.title.is_empty() {
            return Err("title");
        }
        if self.artist.is_empty() {
            return Err("artist");
        }
        if self.audio_data.is_empty() {
            return Err("audioData");
        }
        Ok(self)
    }
}

/// Partial update for an existing track.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackUpdate {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub audio_data: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<String>,
    pub duration: Option<String>,
}
