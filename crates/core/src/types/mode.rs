//! Appointment delivery mode.

use serde::{Deserialize, Serialize};

/// How a counseling session is delivered.
///
/// The wire format is the lowercase single word used by the booking form
/// (`"online"` / `"inperson"`); anything else fails validation at the
/// deserialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "appointment_mode", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentMode {
    /// Remote session over video call.
    Online,
    /// Session at the counselor's office.
    Inperson,
}

impl std::fmt::Display for AppointmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Inperson => write!(f, "inperson"),
        }
    }
}

impl std::str::FromStr for AppointmentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(Self::Online),
            "inperson" => Ok(Self::Inperson),
            _ => Err(format!("invalid appointment mode: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_enumerated_values() {
        let mode: AppointmentMode = serde_json::from_str("\"online\"").unwrap();
        assert_eq!(mode, AppointmentMode::Online);
        let mode: AppointmentMode = serde_json::from_str("\"inperson\"").unwrap();
        assert_eq!(mode, AppointmentMode::Inperson);
    }

    #[test]
    fn test_rejects_anything_else() {
        assert!(serde_json::from_str::<AppointmentMode>("\"in-person\"").is_err());
        assert!(serde_json::from_str::<AppointmentMode>("\"ONLINE\"").is_err());
        assert!(serde_json::from_str::<AppointmentMode>("\"phone\"").is_err());
    }

    #[test]
    fn test_display_matches_wire_format() {
        assert_eq!(AppointmentMode::Online.to_string(), "online");
        assert_eq!(AppointmentMode::Inperson.to_string(), "inperson");
    }
}
