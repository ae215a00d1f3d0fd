//! Shared types used across the footprint crates.
//!
//! Validated newtypes keep request input honest before it reaches the
//! classifier or the lookup provider.

use crate::error::FootprintError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Newtype for a queried username.
///
/// Surrounding whitespace and a single leading `@` are stripped. Any
/// non-empty remainder is accepted as-is; platforms disagree on what a
/// handle may contain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Create a new `Username`, normalising the input.
    ///
    /// # Errors
    /// Returns error if nothing remains after normalisation.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, FootprintError> {
        let trimmed = raw.as_ref().trim();
        let normalized = trimmed.strip_prefix('@').unwrap_or(trimmed).trim();

        if normalized.is_empty() {
            return Err(FootprintError::Validation(
                "username must not be empty".to_string(),
            ));
        }

        Ok(Self(normalized.to_string()))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = FootprintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

/// Newtype for platform identifiers.
///
/// Identifiers are lowercased on construction and must be 1-32 characters of
/// lowercase alphanumerics, `.`, `_` or `-`, starting and ending alphanumeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlatformId(String);

impl PlatformId {
    /// Create a new `PlatformId` from a string.
    ///
    /// # Errors
    /// Returns error if the ID doesn't match the required format.
    pub fn new(id: impl AsRef<str>) -> Result<Self, FootprintError> {
        let id = id.as_ref().trim().to_ascii_lowercase();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(id: &str) -> Result<(), FootprintError> {
        static PLATFORM_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = PLATFORM_REGEX.get_or_init(|| {
            Regex::new(r"^[a-z0-9](?:[a-z0-9._-]{0,30}[a-z0-9])?$").expect("valid regex")
        });

        if regex.is_match(id) {
            Ok(())
        } else {
            Err(FootprintError::Validation(format!(
                "invalid platform ID: must be 1-32 lowercase alphanumeric characters, got '{id}'"
            )))
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlatformId {
    type Error = FootprintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlatformId> for String {
    fn from(id: PlatformId) -> Self {
        id.0
    }
}

/// Categories of personal identifiers a lookup can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// A possible real name
    RealName,
    /// A possible physical location
    Location,
    /// An email address
    Email,
    /// A profile picture or other image URL
    Image,
}

impl IdentifierKind {
    /// All identifier kinds, in reporting order.
    pub const ALL: [Self; 4] = [Self::RealName, Self::Location, Self::Email, Self::Image];

    /// Get a human-readable display name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::RealName => "Real Name",
            Self::Location => "Location",
            Self::Email => "Email Address",
            Self::Image => "Image",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
