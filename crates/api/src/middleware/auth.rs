//! Bearer-token extractors for route handlers.
//!
//! Authorization travels as `Authorization: Bearer <token>`; each extractor
//! verifies the token against the shared secret and hands the handler the
//! decoded claims. Rejections reuse the API error taxonomy, so a missing
//! token answers 401 "No token", a bad one 401 "Invalid token", and a valid
//! token with the wrong role 403.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use crate::error::ApiError;
use crate::services::token::{Claims, TokenError};
use crate::state::AppState;

/// Extractor that requires a valid token with the admin role.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(claims): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", claims.name)
/// }
/// ```
pub struct RequireAdmin(pub Claims);

impl<S> FromRequestParts<S> for RequireAdmin
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let claims = verify_bearer(parts, state)?;

        if !claims.role.is_admin() {
            return Err(ApiError::Forbidden);
        }

        Ok(Self(claims))
    }
}

/// Extractor that requires a valid token, any role.
pub struct CurrentUser(pub Claims);

impl<S> FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(verify_bearer(parts, state)?))
    }
}

/// Extractor that optionally decodes a token.
///
/// Unlike `CurrentUser`, this does not reject the request when no valid
/// token is present.
pub struct OptionalUser(pub Option<Claims>);

impl<S> FromRequestParts<S> for OptionalUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(verify_bearer(parts, state).ok()))
    }
}

/// Pull the bearer token off the request and verify it.
fn verify_bearer<S>(parts: &Parts, state: &S) -> Result<Claims, ApiError>
where
    AppState: FromRef<S>,
{
    let token = bearer_token(parts).ok_or(TokenError::Missing)?;
    let app_state = AppState::from_ref(state);
    let claims = app_state.tokens().verify(&token)?;
    Ok(claims)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/appointments");
        if let Some(v) = value {
            builder = builder.header(header::AUTHORIZATION, v);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn test_bearer_token_extracted() {
        let parts = parts_with_auth(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&parts).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header_is_none() {
        assert!(bearer_token(&parts_with_auth(None)).is_none());
    }

    #[test]
    fn test_wrong_scheme_is_none() {
        let parts = parts_with_auth(Some("Basic dXNlcjpwYXNz"));
        assert!(bearer_token(&parts).is_none());
    }

    #[test]
    fn test_empty_bearer_is_none() {
        let parts = parts_with_auth(Some("Bearer "));
        assert!(bearer_token(&parts).is_none());
    }
}
