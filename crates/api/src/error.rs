//! Unified error handling for the API.
//!
//! Provides a single `ApiError` type that maps every failure onto the HTTP
//! taxonomy the clients rely on. All route handlers return
//! `Result<T, ApiError>`; failure bodies are JSON `{"message": ...}` with no
//! further structure.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::token::TokenError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed required field.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate unique key.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No record for the given id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or invalid bearer token.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Valid token, wrong role.
    #[error("Forbidden")]
    Forbidden,

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body: a short message, nothing more.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Auth(err) => match err {
                AuthError::UserNotFound => StatusCode::NOT_FOUND,
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::UserAlreadyExists => StatusCode::CONFLICT,
                AuthError::WeakPassword(_) | AuthError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
                AuthError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Database(err) => match err {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::Conflict(_) => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal detail is never exposed.
    fn message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Conflict(msg) => msg.clone(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::Unauthenticated(msg) => msg.clone(),
            Self::Forbidden => "Forbidden".to_string(),
            Self::Auth(err) => match err {
                AuthError::UserNotFound => "No record existed".to_string(),
                AuthError::InvalidCredentials => "Incorrect Password".to_string(),
                AuthError::UserAlreadyExists => "Email already registered".to_string(),
                AuthError::WeakPassword(msg) => msg.clone(),
                AuthError::InvalidEmail(e) => e.to_string(),
                AuthError::Repository(RepositoryError::NotFound) => "User not found".to_string(),
                _ => "Server error".to_string(),
            },
            Self::Database(err) => match err {
                RepositoryError::NotFound => "Not found".to_string(),
                RepositoryError::Conflict(msg) => msg.clone(),
                _ => "Server error".to_string(),
            },
            Self::Internal(_) => "Server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request error");
        }

        (
            status,
            Json(ErrorBody {
                message: self.message(),
            }),
        )
            .into_response()
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Missing => Self::Unauthenticated("No token".to_string()),
            TokenError::Invalid | TokenError::Expired => {
                Self::Unauthenticated("Invalid token".to_string())
            }
            TokenError::Signing(_) => Self::Internal(err.to_string()),
        }
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn get_status(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_taxonomy_status_codes() {
        assert_eq!(
            get_status(ApiError::Validation("bad".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::Conflict("dup".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(ApiError::NotFound("Appointment".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(ApiError::Unauthenticated("No token".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(get_status(ApiError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(
            get_status(ApiError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_error_mapping() {
        assert_eq!(
            get_status(ApiError::Auth(AuthError::UserNotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(ApiError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(ApiError::Auth(AuthError::UserAlreadyExists)),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_token_error_mapping() {
        assert_eq!(
            get_status(ApiError::from(TokenError::Missing)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(ApiError::from(TokenError::Expired)),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_internal_detail_not_exposed() {
        let err = ApiError::Internal("connection pool exhausted at 10.0.0.3".to_string());
        assert_eq!(err.message(), "Server error");
    }
}
