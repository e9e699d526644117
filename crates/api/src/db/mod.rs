//! Database operations for the MindWell `PostgreSQL` store.
//!
//! # Tables
//!
//! - `account` - Registered users with credentials, role, and profile fields
//! - `appointment` - Counseling session bookings
//! - `counselor` - Counselor directory entries
//! - `message` - Contact-form messages
//! - `music_track` - Relaxation music library
//!
//! Queries are runtime-checked (`sqlx::query` / `query_as` with `FromRow`
//! row types); each repository maps rows into validated domain types and
//! surfaces bad stored data as `RepositoryError::DataCorruption`.
//!
//! # Migrations
//!
//! Migrations live in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p mw-cli -- migrate
//! ```

pub mod accounts;
pub mod appointments;
pub mod counselors;
pub mod messages;
pub mod music;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use accounts::AccountRepository;
pub use appointments::AppointmentRepository;
pub use counselors::{CounselorChanges, CounselorFilter, CounselorRepository};
pub use messages::MessageRepository;
pub use music::MusicRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Map a sqlx error to `Conflict` when it is a unique-index violation.
fn map_unique_violation(e: sqlx::Error, what: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict(format!("{what} already exists"));
    }
    RepositoryError::Database(e)
}
