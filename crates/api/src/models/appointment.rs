//! Appointment domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mindwell_core::{AppointmentId, AppointmentMode, Email};

/// A scheduled counseling session (domain type).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Unique appointment ID.
    pub id: AppointmentId,
    /// Requester display name.
    pub name: String,
    /// Requester email, lowercased.
    pub email: Email,
    pub phone: String,
    pub mode: AppointmentMode,
    /// Counselor display name. Free text, not a foreign key.
    pub counselor: String,
    pub notes: String,
    /// Session start time.
    pub start_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Booking payload for creating an appointment.
///
/// Deserialization is the validation boundary: the mode must be one of the
/// enumerated values and `startAt` is required. String fields are trimmed
/// before storage; a trimmed-empty required field fails validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub mode: AppointmentMode,
    pub counselor: String,
    #[serde(default)]
    pub notes: String,
    pub start_at: DateTime<Utc>,
}

impl NewAppointment {
    /// Trim string fields and check required ones are non-empty.
    ///
    /// # Errors
    ///
    /// Returns the name of the first empty required field.
    pub fn normalize(mut self) -> Result<Self, &'static str> {
        self.name = self.name.trim().to_string();
        self.phone = self.phone.trim().to_string();
        self.counselor = self.counselor.trim().to_string();
        self.notes = self.notes.trim().to_string();

        if self.name.is_empty() {
            return Err("name");
        }
        if self.phone.is_empty() {
            return Err("phone");
        }
        if self.counselor.is_empty() {
            return Err("counselor");
        }
        Ok(self)
    }
}

/// Partial update for an existing appointment.
///
/// Absent fields leave the stored values unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub phone: Option<String>,
    pub mode: Option<AppointmentMode>,
    pub counselor: Option<String>,
    pub notes: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_appointment_requires_valid_mode() {
        let err = serde_json::from_str::<NewAppointment>(
            r#"{"name":"A","email":"a@x.com","phone":"1","mode":"phone",
                "counselor":"Dr. B","startAt":"2026-09-01T10:00:00Z"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_new_appointment_requires_start_at() {
        let err = serde_json::from_str::<NewAppointment>(
            r#"{"name":"A","email":"a@x.com","phone":"1","mode":"online","counselor":"Dr. B"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_new_appointment_lowercases_email() {
        let booking: NewAppointment = serde_json::from_str(
            r#"{"name":"A","email":"Foo@Bar.COM","phone":"1","mode":"online",
                "counselor":"Dr. B","startAt":"2026-09-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(booking.email.as_str(), "foo@bar.com");
        assert_eq!(booking.notes, "");
    }

    #[test]
    fn test_normalize_trims_and_rejects_empty() {
        let booking: NewAppointment = serde_json::from_str(
            r#"{"name":"  A ","email":"a@x.com","phone":" 1 ","mode":"inperson",
                "counselor":"  ","startAt":"2026-09-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(booking.normalize().unwrap_err(), "counselor");
    }

    #[test]
    fn test_start_at_preserved_exactly() {
        let booking: NewAppointment = serde_json::from_str(
            r#"{"name":"A","email":"a@x.com","phone":"1","mode":"online",
                "counselor":"Dr. B","startAt":"2026-09-01T10:30:15Z"}"#,
        )
        .unwrap();
        assert_eq!(
            booking.start_at,
            "2026-09-01T10:30:15Z".parse::<DateTime<Utc>>().unwrap()
        );
    }
}
