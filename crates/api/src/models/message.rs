//! Contact message domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mindwell_core::MessageId;

/// A contact-form message (domain type).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message ID.
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a message. All fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewMessage {
    /// Trim fields and check they are non-empty.
    ///
    /// # Errors
    ///
    /// Returns the name of the first empty required field.
    pub fn normalize(mut self) -> Result<Self, &'static str> {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.message = self.message.trim().to_string();

        if self.name.is_empty() {
            return Err("name");
        }
        if self.email.is_empty() {
            return Err("email");
        }
        if self.message.is_empty() {
            return Err("message");
        }
        Ok(self)
    }
}

/// Partial update for an existing message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rejects_blank_message() {
        let msg = NewMessage {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            message: "   ".to_string(),
        };
        assert_eq!(msg.normalize().unwrap_err(), "message");
    }

    #[test]
    fn test_normalize_trims() {
        let msg = NewMessage {
            name: " A ".to_string(),
            email: " a@x.com ".to_string(),
            message: " hello ".to_string(),
        };
        let msg = msg.normalize().unwrap();
        assert_eq!(msg.name, "A");
        assert_eq!(msg.message, "hello");
    }
}
