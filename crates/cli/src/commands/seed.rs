//! Bootstrap seeding command.
//!
//! # Usage
//!
//! ```bash
//! mw-cli seed
//! ```
//!
//! Runs the same idempotent seeding the server performs on startup: the
//! default admin account and the counselor catalog.

use thiserror::Error;

use mindwell_api::config::{ApiConfig, ConfigError};
use mindwell_api::{db, seed};

/// Errors that can occur during seeding.
#[derive(Debug, Error)]
pub enum SeedCommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Seed error: {0}")]
    Seed(#[from] seed::SeedError),
}

/// Seed bootstrap data.
///
/// # Errors
///
/// Returns `SeedCommandError` if the connection or a seeding step fails.
pub async fn run() -> Result<(), SeedCommandError> {
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    let pool = db::create_pool(&config.database_url).await?;
    seed::run(&pool).await?;

    tracing::info!("Seeding complete");
    Ok(())
}
