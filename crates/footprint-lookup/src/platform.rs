//! Per-platform input and classified output types.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Confidence above which a match is reported as strong.
pub const STRONG_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Confidence at or above which a match is reported as medium.
pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.4;

/// Raw provider output for one platform, before classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformFinding {
    /// Platform identifier as reported by the provider
    pub name: String,
    /// Opaque provider data; `None` means the provider returned nothing
    #[serde(default)]
    pub raw_signal: Option<JsonValue>,
}

impl PlatformFinding {
    /// A finding carrying a provider signal.
    #[must_use]
    pub fn new(name: impl Into<String>, raw_signal: JsonValue) -> Self {
        Self {
            name: name.into(),
            raw_signal: Some(raw_signal),
        }
    }

    /// A finding for which the provider returned no signal.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_signal: None,
        }
    }
}

/// Classification outcome for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformStatus {
    /// A verified existing profile
    #[serde(rename = "found")]
    Found,
    /// The handle exists but no profile content was confirmed
    #[serde(rename = "possible")]
    Possible,
    /// No signal for this platform
    #[serde(rename = "not found")]
    NotFound,
}

impl PlatformStatus {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::Possible => "possible",
            Self::NotFound => "not found",
        }
    }

    /// Badge label for display.
    #[must_use]
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Found => "Found",
            Self::Possible => "Possible",
            Self::NotFound => "Not Found",
        }
    }
}

impl fmt::Display for PlatformStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display tier for a match confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    /// Confidence above 0.7
    Strong,
    /// Confidence in `0.4..=0.7`
    Medium,
    /// Confidence below 0.4
    Weak,
}

impl ConfidenceTier {
    /// Map a confidence value onto its tier.
    #[must_use]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > STRONG_CONFIDENCE_THRESHOLD {
            Self::Strong
        } else if confidence >= MEDIUM_CONFIDENCE_THRESHOLD {
            Self::Medium
        } else {
            Self::Weak
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Medium => "medium",
            Self::Weak => "weak",
        }
    }
}

/// Provider-observed profile attributes. Only attached to found platforms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Join date, `YYYY-MM-DD` when the provider value parsed as a date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_date: Option<String>,
    /// Last activity date, `YYYY-MM-DD` when the provider value parsed as a date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<u64>,
}

impl ProfileMetadata {
    /// True when no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A classified platform.
///
/// Only constructible through [`PlatformResult::found`],
/// [`PlatformResult::possible`] and [`PlatformResult::not_found`], which keep
/// status, username and metadata consistent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformResult {
    name: String,
    url: String,
    status: PlatformStatus,
    username: String,
    confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<ProfileMetadata>,
}

impl PlatformResult {
    /// A verified profile. Empty metadata is dropped.
    #[must_use]
    pub fn found(
        name: impl Into<String>,
        url: impl Into<String>,
        username: impl Into<String>,
        confidence: f64,
        metadata: Option<ProfileMetadata>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            status: PlatformStatus::Found,
            username: username.into(),
            confidence: clamp_unit(confidence),
            metadata: metadata.filter(|m| !m.is_empty()),
        }
    }

    /// An unconfirmed username match.
    #[must_use]
    pub fn possible(
        name: impl Into<String>,
        url: impl Into<String>,
        username: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            status: PlatformStatus::Possible,
            username: username.into(),
            confidence: clamp_unit(confidence),
            metadata: None,
        }
    }

    /// No presence on this platform.
    #[must_use]
    pub fn not_found(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            status: PlatformStatus::NotFound,
            username: String::new(),
            confidence: 0.0,
            metadata: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn status(&self) -> PlatformStatus {
        self.status
    }

    /// Matched handle; empty for `NotFound`.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Raw confidence. Only meaningful when the status is not `NotFound`.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&ProfileMetadata> {
        self.metadata.as_ref()
    }

    /// Display tier, or `None` for platforms that were not found.
    #[must_use]
    pub fn confidence_tier(&self) -> Option<ConfidenceTier> {
        match self.status {
            PlatformStatus::NotFound => None,
            PlatformStatus::Found | PlatformStatus::Possible => {
                Some(ConfidenceTier::from_confidence(self.confidence))
            }
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
