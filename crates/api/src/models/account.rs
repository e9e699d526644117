//! Account domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mindwell_core::{AccountId, Email, Role};

/// A registered account (domain type).
///
/// The password hash never leaves the repository layer; this type is safe
/// to serialize straight into profile responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account ID.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Lowercased unique email address.
    pub email: Email,
    /// Permission role. Immutable through the public profile-update path.
    pub role: Role,
    pub phone: String,
    pub bio: String,
    pub specialization: String,
    pub experience: String,
    pub qualification: String,
    pub profile_image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile fields an account holder may change about themselves.
///
/// Deliberately excludes `email`, `role`, and the password: none of those
/// are reachable through the profile-update path.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub specialization: Option<String>,
    pub experience: Option<String>,
    pub qualification: Option<String>,
    pub profile_image: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_update_ignores_role_and_email() {
        // Extra fields in the payload are dropped, not applied
        let update: ProfileUpdate = serde_json::from_str(
            r#"{"name":"A","role":"admin","email":"x@y.z","phone":"123"}"#,
        )
        .unwrap();
        assert_eq!(update.name.as_deref(), Some("A"));
        assert_eq!(update.phone.as_deref(), Some("123"));
    }

    #[test]
    fn test_account_serializes_camel_case() {
        let account = Account {
            id: AccountId::new(1),
            name: "A".to_string(),
            email: Email::parse("a@x.com").unwrap(),
            role: Role::Employee,
            phone: String::new(),
            bio: String::new(),
            specialization: String::new(),
            experience: String::new(),
            qualification: String::new(),
            profile_image: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("profileImage").is_some());
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }
}
