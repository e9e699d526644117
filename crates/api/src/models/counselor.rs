//! Counselor directory domain types.
//!
//! The canonical counselor shape is the extended one: numeric
//! `experienceYears`, `imageUrl`, and ordered string sequences for
//! `languages`/`approach`. An older client generation still submits the
//! legacy shape (free-text `experience`, `image`); [`CounselorPayload`]
//! adapts it at the API boundary so the legacy shape is never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mindwell_core::CounselorId;

/// A counselor directory entry (domain type, canonical shape).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Counselor {
    /// Unique counselor ID.
    pub id: CounselorId,
    pub name: String,
    /// E.g. "Anxiety & Stress".
    pub category: String,
    pub experience_years: i32,
    pub languages: Vec<String>,
    pub approach: Vec<String>,
    pub quote: String,
    /// 1-5 stars.
    pub rating: i32,
    pub image_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A list field that arrives either as an array or as a comma-separated
/// string (admin console sends the latter).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    Many(Vec<String>),
    One(String),
}

impl StringList {
    /// Normalize into an ordered sequence of trimmed, non-empty strings.
    #[must_use]
    pub fn normalize(self) -> Vec<String> {
        let parts: Vec<String> = match self {
            Self::Many(items) => items,
            Self::One(s) => s.split(',').map(str::to_string).collect(),
        };
        parts
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Create/update payload for a counselor, accepting both the canonical and
/// the legacy field spelling.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounselorPayload {
    pub name: Option<String>,
    pub category: Option<String>,
    pub experience_years: Option<i32>,
    /// Legacy free-text years field, e.g. `"12 years"`.
    pub experience: Option<String>,
    pub languages: Option<StringList>,
    pub approach: Option<StringList>,
    pub quote: Option<String>,
    pub rating: Option<i32>,
    pub image_url: Option<String>,
    /// Legacy spelling of `imageUrl`.
    pub image: Option<String>,
    pub is_active: Option<bool>,
}

impl CounselorPayload {
    /// Resolved experience in years, preferring the canonical field and
    /// falling back to the leading number of the legacy free-text field.
    #[must_use]
    pub fn resolved_experience_years(&self) -> Option<i32> {
        if let Some(years) = self.experience_years {
            return Some(years.max(0));
        }
        self.experience.as_deref().map(parse_legacy_experience)
    }

    /// Resolved image URL, preferring the canonical field.
    #[must_use]
    pub fn resolved_image_url(&self) -> Option<String> {
        self.image_url.clone().or_else(|| self.image.clone())
    }

    /// Rating, validated against the 1-5 star scale. A missing rating is
    /// fine (the store default of 4 applies on create).
    ///
    /// # Errors
    ///
    /// Returns a message when the rating is outside [1, 5].
    pub fn resolved_rating(&self) -> Result<Option<i32>, &'static str> {
        match self.rating {
            Some(r) if !(1..=5).contains(&r) => Err("rating must be between 1 and 5"),
            other => Ok(other),
        }
    }

    /// Validate the payload as a full create request.
    ///
    /// # Errors
    ///
    /// Returns the missing required field name.
    pub fn require_create_fields(&self) -> Result<(String, String), &'static str> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or("name")?;
        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or("category")?;
        Ok((name.to_string(), category.to_string()))
    }
}

/// Pull the leading integer out of legacy experience text ("12 years" -> 12).
fn parse_legacy_experience(text: &str) -> i32 {
    let digits: String = text
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_string_list_from_comma_string() {
        let list: StringList = serde_json::from_str("\"English, Sinhala , ,Tamil\"").unwrap();
        assert_eq!(list.normalize(), vec!["English", "Sinhala", "Tamil"]);
    }

    #[test]
    fn test_string_list_from_array() {
        let list: StringList = serde_json::from_str(r#"["CBT"," Mindfulness ",""]"#).unwrap();
        assert_eq!(list.normalize(), vec!["CBT", "Mindfulness"]);
    }

    #[test]
    fn test_legacy_experience_adapter() {
        let payload: CounselorPayload =
            serde_json::from_str(r#"{"experience":"12 years"}"#).unwrap();
        assert_eq!(payload.resolved_experience_years(), Some(12));

        let payload: CounselorPayload =
            serde_json::from_str(r#"{"experience":"seasoned"}"#).unwrap();
        assert_eq!(payload.resolved_experience_years(), Some(0));
    }

    #[test]
    fn test_canonical_experience_wins() {
        let payload: CounselorPayload =
            serde_json::from_str(r#"{"experienceYears":7,"experience":"12 years"}"#).unwrap();
        assert_eq!(payload.resolved_experience_years(), Some(7));
    }

    #[test]
    fn test_legacy_image_adapter() {
        let payload: CounselorPayload =
            serde_json::from_str(r#"{"image":"/uploads/a.jpg"}"#).unwrap();
        assert_eq!(
            payload.resolved_image_url().as_deref(),
            Some("/uploads/a.jpg")
        );

        let payload: CounselorPayload =
            serde_json::from_str(r#"{"imageUrl":"/new.jpg","image":"/old.jpg"}"#).unwrap();
        assert_eq!(payload.resolved_image_url().as_deref(), Some("/new.jpg"));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let payload: CounselorPayload = serde_json::from_str(r#"{"rating":9}"#).unwrap();
        assert!(payload.resolved_rating().is_err());

        let payload: CounselorPayload = serde_json::from_str(r#"{"rating":0}"#).unwrap();
        assert!(payload.resolved_rating().is_err());
    }

    #[test]
    fn test_rating_in_range_or_missing_accepted() {
        let payload: CounselorPayload = serde_json::from_str(r#"{"rating":5}"#).unwrap();
        assert_eq!(payload.resolved_rating().unwrap(), Some(5));

        let payload: CounselorPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.resolved_rating().unwrap(), None);
    }

    #[test]
    fn test_require_create_fields() {
        let payload: CounselorPayload =
            serde_json::from_str(r#"{"name":"Dr. A","category":"Anxiety & Stress"}"#).unwrap();
        let (name, category) = payload.require_create_fields().unwrap();
        assert_eq!(name, "Dr. A");
        assert_eq!(category, "Anxiety & Stress");

        let payload: CounselorPayload = serde_json::from_str(r#"{"name":"  "}"#).unwrap();
        assert_eq!(payload.require_create_fields().unwrap_err(), "name");
    }
}
