use crate::error::SignalError;
use crate::platform::ProfileMetadata;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// How the provider matched the username on a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// An existing profile page was confirmed
    Profile,
    /// The handle is taken but no profile content was confirmed
    Username,
    /// Nothing matched
    None,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSignal {
    #[serde(rename = "match")]
    pub match_kind: MatchKind,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub strength: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub profile: Option<ProviderProfile>,
    #[serde(default)]
    pub identifiers: ProviderIdentifiers,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfile {
    pub bio: Option<String>,
    pub joined_date: Option<String>,
    pub last_active: Option<String>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub posts: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderIdentifiers {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl ProviderSignal {
    /// Decode a raw provider value.
    ///
    /// # Errors
    /// Returns `SignalError` if the value is not an object or its fields have
    /// the wrong shape.
    pub fn parse(value: &JsonValue) -> Result<Self, SignalError> {
        if !value.is_object() {
            return Err(SignalError::NotAnObject);
        }
        Ok(Self::deserialize(value)?)
    }

    /// Handle reported by the provider, if it is non-blank.
    #[must_use]
    pub fn handle(&self) -> Option<&str> {
        non_blank(self.handle.as_deref())
    }

    /// Profile URL reported by the provider, if it is non-blank.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        non_blank(self.url.as_deref())
    }
}

impl ProviderProfile {
    pub fn into_metadata(self) -> ProfileMetadata {
        ProfileMetadata {
            bio: self
                .bio
                .map(|bio| bio.trim().to_string())
                .filter(|bio| !bio.is_empty()),
            joined_date: self.joined_date.as_deref().and_then(normalize_date),
            last_active: self.last_active.as_deref().and_then(normalize_date),
            followers: self.followers,
            following: self.following,
            posts: self.posts,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Normalise an RFC 3339 timestamp or ISO date to `YYYY-MM-DD`.
///
/// Values that parse as neither are kept verbatim; blank values are dropped.
pub fn normalize_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive().format("%Y-%m-%d").to_string());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.format("%Y-%m-%d").to_string());
    }

    Some(raw.to_string())
}
