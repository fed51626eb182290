use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::photo::ProfilePhoto;

/// Experience level reported by the backend, e.g. `beginner`.
///
/// Kept as the raw server string so new levels render without a client update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileLevel(String);

impl ProfileLevel {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display label with the first character upper-cased.
    #[must_use]
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Server-owned account record, as returned by `GET /auth/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub level: ProfileLevel,
    #[serde(default)]
    pub profile_photo: Option<String>,
    /// `None` when the field is missing or not a recognised timestamp.
    #[serde(default, deserialize_with = "deserialize_created_at")]
    pub created_at: Option<DateTime<Utc>>,
}

const NAIVE_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse RFC 3339, or a zone-less `YYYY-MM-DD HH:MM:SS` taken as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

fn deserialize_created_at<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(serde_json::Value::as_str).and_then(parse_timestamp))
}

impl Profile {
    #[must_use]
    pub fn bio_or_empty(&self) -> &str {
        self.bio.as_deref().unwrap_or_default()
    }

    /// The photo to show, if any. An empty string counts as no photo.
    #[must_use]
    pub fn photo(&self) -> Option<&str> {
        self.profile_photo
            .as_deref()
            .filter(|photo| !photo.is_empty())
    }

    /// Replace the pending photo. The change stays local until an update is sent.
    pub fn set_photo(&mut self, photo: &ProfilePhoto) {
        self.profile_photo = Some(photo.as_str().to_owned());
    }

    /// Build the update payload from the edited form values and the cached photo.
    #[must_use]
    pub fn to_update(&self, username: impl Into<String>, bio: impl Into<String>) -> ProfileUpdate {
        ProfileUpdate {
            username: username.into(),
            bio: bio.into(),
            profile_photo: self.profile_photo.clone(),
        }
    }
}

/// Body of `PUT /auth/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub bio: String,
    pub profile_photo: Option<String>,
}
