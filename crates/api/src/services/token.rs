//! Bearer token service.
//!
//! Signs and verifies the HS256 tokens that carry an authenticated session.
//! Tokens are stateless: everything the request pipeline needs about the
//! caller (id, role, email, display name) travels inside the claims, so no
//! server-side session store is consulted.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use mindwell_core::{AccountId, Email, Role};

use crate::models::account::Account;

/// Token lifetime in hours.
const TOKEN_TTL_HOURS: i64 = 24;

/// Errors from token handling.
#[derive(Debug, Error)]
pub enum TokenError {
    /// No Authorization header, or not a bearer scheme.
    #[error("missing bearer token")]
    Missing,

    /// Signature or claim validation failed.
    #[error("invalid token")]
    Invalid,

    /// Token is past its expiry.
    #[error("expired token")]
    Expired,

    /// Signing failed.
    #[error("token signing failed: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

/// Claims embedded in every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id, as a decimal string.
    pub sub: String,
    pub role: Role,
    pub email: Email,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// The account id the token was issued for.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` when the subject is not a numeric id.
    pub fn account_id(&self) -> Result<AccountId, TokenError> {
        self.sub
            .parse::<i32>()
            .map(AccountId::new)
            .map_err(|_| TokenError::Invalid)
    }
}

/// Signs and verifies session tokens with a shared secret.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the configured signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Issue a token for an authenticated account.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Signing` if encoding fails.
    pub fn sign(&self, account: &Account) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: account.id.as_i32().to_string(),
            role: account.role,
            email: account.email.clone(),
            name: account.name.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Expired` for a token past its expiry and
    /// `TokenError::Invalid` for any other validation failure.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_account() -> Account {
        Account {
            id: AccountId::new(7),
            name: "Test User".to_string(),
            email: Email::parse("test@example.com").unwrap(),
            role: Role::Employee,
            phone: String::new(),
            bio: String::new(),
            specialization: String::new(),
            experience: String::new(),
            qualification: String::new(),
            profile_image: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service() -> TokenService {
        TokenService::new(&SecretString::from("a-test-secret-long-enough-to-sign"))
    }

    #[test]
    fn test_sign_verify_round_trip() {
        let tokens = service();
        let token = tokens.sign(&test_account()).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.account_id().unwrap(), AccountId::new(7));
        assert_eq!(claims.role, Role::Employee);
        assert_eq!(claims.email.as_str(), "test@example.com");
        assert_eq!(claims.name, "Test User");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = service().sign(&test_account()).unwrap();
        let other = TokenService::new(&SecretString::from("a-different-secret-also-long"));
        assert!(matches!(other.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(matches!(
            service().verify("not.a.token"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = service();
        let now = Utc::now();
        let claims = Claims {
            sub: "7".to_string(),
            role: Role::Admin,
            email: Email::parse("test@example.com").unwrap(),
            name: "Test".to_string(),
            iat: (now - Duration::days(2)).timestamp(),
            exp: (now - Duration::days(1)).timestamp(),
        };
        let token =
            jsonwebtoken::encode(&Header::default(), &claims, &tokens.encoding_key).unwrap();

        assert!(matches!(tokens.verify(&token), Err(TokenError::Expired)));
    }
}
