//! Built-in catalog of known platforms and their profile URL templates.

use footprint_core::PlatformId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Placeholder replaced with the percent-encoded handle in URL templates.
pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// Broad grouping of platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformCategory {
    Code,
    Social,
    Professional,
    Media,
    Community,
}

/// A known platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformDefinition {
    pub id: PlatformId,
    pub display_name: String,
    pub category: PlatformCategory,
    /// Profile URL with a `{username}` placeholder
    pub url_template: String,
}

impl PlatformDefinition {
    pub fn new(
        id: PlatformId,
        display_name: impl Into<String>,
        category: PlatformCategory,
        url_template: impl Into<String>,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            category,
            url_template: url_template.into(),
        }
    }

    /// Profile URL for a handle on this platform.
    #[must_use]
    pub fn profile_url(&self, handle: &str) -> String {
        build_profile_url(&self.url_template, handle)
    }
}

/// Substitute a percent-encoded handle into a URL template.
#[must_use]
pub fn build_profile_url(template: &str, handle: &str) -> String {
    template.replace(USERNAME_PLACEHOLDER, &urlencoding::encode(handle.trim()))
}

const BUILTIN_PLATFORMS: &[(&str, &str, PlatformCategory, &str)] = &[
    (
        "github",
        "GitHub",
        PlatformCategory::Code,
        "https://github.com/{username}",
    ),
    (
        "gitlab",
        "GitLab",
        PlatformCategory::Code,
        "https://gitlab.com/{username}",
    ),
    (
        "twitter",
        "Twitter / X",
        PlatformCategory::Social,
        "https://x.com/{username}",
    ),
    (
        "instagram",
        "Instagram",
        PlatformCategory::Social,
        "https://www.instagram.com/{username}",
    ),
    (
        "facebook",
        "Facebook",
        PlatformCategory::Social,
        "https://www.facebook.com/{username}",
    ),
    (
        "tiktok",
        "TikTok",
        PlatformCategory::Social,
        "https://www.tiktok.com/@{username}",
    ),
    (
        "linkedin",
        "LinkedIn",
        PlatformCategory::Professional,
        "https://www.linkedin.com/in/{username}",
    ),
    (
        "medium",
        "Medium",
        PlatformCategory::Media,
        "https://medium.com/@{username}",
    ),
    (
        "youtube",
        "YouTube",
        PlatformCategory::Media,
        "https://www.youtube.com/@{username}",
    ),
    (
        "pinterest",
        "Pinterest",
        PlatformCategory::Media,
        "https://www.pinterest.com/{username}",
    ),
    (
        "twitch",
        "Twitch",
        PlatformCategory::Media,
        "https://www.twitch.tv/{username}",
    ),
    (
        "reddit",
        "Reddit",
        PlatformCategory::Community,
        "https://www.reddit.com/user/{username}",
    ),
];

/// Ordered, immutable registry of platform definitions.
///
/// Cloning is cheap; definitions are shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PlatformCatalog {
    platforms: Arc<Vec<PlatformDefinition>>,
}

impl PlatformCatalog {
    /// Build a catalog from definitions. Later duplicates of an id are ignored.
    #[must_use]
    pub fn new(definitions: impl IntoIterator<Item = PlatformDefinition>) -> Self {
        let mut platforms: Vec<PlatformDefinition> = Vec::new();
        for definition in definitions {
            if platforms.iter().any(|p| p.id == definition.id) {
                debug!(platform = %definition.id, "ignoring duplicate platform definition");
                continue;
            }
            platforms.push(definition);
        }

        Self {
            platforms: Arc::new(platforms),
        }
    }

    /// The catalog of built-in platforms.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN_PLATFORMS.iter().map(|(id, name, category, template)| {
            PlatformDefinition::new(
                PlatformId::new(id).expect("builtin platform ids are valid"),
                *name,
                *category,
                *template,
            )
        }))
    }

    #[must_use]
    pub fn get(&self, id: &PlatformId) -> Option<&PlatformDefinition> {
        self.platforms.iter().find(|p| &p.id == id)
    }

    /// Look up a platform by a provider-reported name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&PlatformDefinition> {
        PlatformId::new(name).ok().and_then(|id| self.get(&id))
    }

    #[must_use]
    pub fn contains(&self, id: &PlatformId) -> bool {
        self.get(id).is_some()
    }

    /// Platform ids in catalog order.
    #[must_use]
    pub fn ids(&self) -> Vec<PlatformId> {
        self.platforms.iter().map(|p| p.id.clone()).collect()
    }

    #[must_use]
    pub fn all(&self) -> &[PlatformDefinition] {
        &self.platforms
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Profile URL for a handle on a named platform, if the platform is known.
    #[must_use]
    pub fn profile_url(&self, name: &str, handle: &str) -> Option<String> {
        self.find(name).map(|p| p.profile_url(handle))
    }
}

impl Default for PlatformCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> PlatformId {
        PlatformId::new(raw).expect("valid platform id")
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = PlatformCatalog::builtin();
        assert_eq!(catalog.len(), BUILTIN_PLATFORMS.len());
        assert_eq!(catalog.ids()[0], id("github"));
        assert!(catalog.contains(&id("reddit")));
        assert!(!catalog.contains(&id("myspace")));
    }

    #[test]
    fn test_profile_url_encodes_handle() {
        let catalog = PlatformCatalog::builtin();
        assert_eq!(
            catalog.profile_url("github", "octocat").as_deref(),
            Some("https://github.com/octocat")
        );
        assert_eq!(
            catalog.profile_url("TikTok", "a b").as_deref(),
            Some("https://www.tiktok.com/@a%20b")
        );
        assert!(catalog.profile_url("myspace", "octocat").is_none());
        assert!(catalog.profile_url("", "octocat").is_none());
    }

    #[test]
    fn test_duplicate_definitions_ignored() {
        let catalog = PlatformCatalog::new([
            PlatformDefinition::new(
                id("forum"),
                "Forum",
                PlatformCategory::Community,
                "https://forum.example/u/{username}",
            ),
            PlatformDefinition::new(
                id("forum"),
                "Other Forum",
                PlatformCategory::Community,
                "https://other.example/{username}",
            ),
        ]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.all()[0].display_name, "Forum");
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&PlatformCategory::Professional)
            .expect("serialize category");
        assert_eq!(json, r#""professional""#);
    }
}
