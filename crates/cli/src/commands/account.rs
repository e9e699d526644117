//! Account management commands.
//!
//! # Usage
//!
//! ```bash
//! mw-cli account create -e admin2@mindwell.com -n "Second Admin" -p 'S3cure-Pass' -r admin
//! ```

use std::str::FromStr;

use thiserror::Error;

use mindwell_core::Role;

use mindwell_api::config::{ApiConfig, ConfigError};
use mindwell_api::services::{AuthError, AuthService};
use mindwell_api::db;

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid role: {0}. Valid roles: admin, employee")]
    InvalidRole(String),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

/// Create a new account.
///
/// # Errors
///
/// Returns `AccountError` if the role is unknown, the email is taken, or
/// a database operation fails.
pub async fn create(email: &str, name: &str, password: &str, role: &str) -> Result<(), AccountError> {
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    let role =
        Role::from_str(role).map_err(|_| AccountError::InvalidRole(role.to_string()))?;

    let pool = db::create_pool(&config.database_url).await?;
    let account = AuthService::new(&pool)
        .register(name, email, password, role)
        .await?;

    tracing::info!(account_id = %account.id, email = %account.email, role = %account.role, "Account created");
    Ok(())
}
