//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! mw-cli migrate
//! ```
//!
//! Resolves the database URL the same way the server does
//! (`MINDWELL_DATABASE_URL`, then `DATABASE_URL`, then the local default).

use thiserror::Error;

use mindwell_api::config::{ApiConfig, ConfigError};
use mindwell_api::db;

/// Errors that can occur during migration.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Run all pending migrations.
///
/// # Errors
///
/// Returns `MigrationError` if the connection or a migration fails.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../api/migrations").run(&pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}
