//! Platform classification.
//!
//! Maps one raw provider finding to a [`PlatformResult`]. Classification never
//! fails: a malformed signal degrades to `NotFound` for that platform only.
//!
//! Confidence mapping:
//!
//! | Signal `match` | Status     | Confidence                                   |
//! |----------------|------------|----------------------------------------------|
//! | `profile`      | `Found`    | `strength` (default 0.9) clamped to `[0.7, 1.0]` |
//! | `username`     | `Possible` | `strength` (default 0.5) clamped to `[0.0, 0.7]` |
//! | `none`/absent  | `NotFound` | not reported                                 |
//!
//! The resulting confidence feeds [`ConfidenceTier`](crate::platform::ConfidenceTier):
//! above 0.7 strong, 0.4 to 0.7 medium, below 0.4 weak.

use crate::catalog::PlatformCatalog;
use crate::error::SignalError;
use crate::platform::{PlatformFinding, PlatformResult};
use crate::signal::{MatchKind, ProviderSignal};
use footprint_core::{ClassifierConfig, IdentifierKind, Username};
use tracing::{debug, warn};

/// Lowest confidence a verified profile match can carry.
pub const FOUND_CONFIDENCE_FLOOR: f64 = 0.7;

/// Highest confidence an unconfirmed username match can carry.
pub const POSSIBLE_CONFIDENCE_CEILING: f64 = 0.7;

/// A classified platform plus the identifiers its signal surfaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The classified platform
    pub result: PlatformResult,
    /// Identifiers in signal order. Always empty for `NotFound`.
    pub identifiers: Vec<(IdentifierKind, String)>,
}

impl Classification {
    fn not_found(result: PlatformResult) -> Self {
        Self {
            result,
            identifiers: Vec::new(),
        }
    }
}

/// Classifies raw provider findings.
#[derive(Debug, Clone)]
pub struct PlatformClassifier {
    catalog: PlatformCatalog,
    defaults: ClassifierConfig,
}

impl PlatformClassifier {
    /// Create a classifier resolving URLs through `catalog`.
    #[must_use]
    pub fn new(catalog: PlatformCatalog, defaults: ClassifierConfig) -> Self {
        Self { catalog, defaults }
    }

    /// Classify one finding for the queried username.
    ///
    /// The queried username stands in for the handle when the provider omits
    /// one, and is used to build catalog URLs for platforms with no presence.
    #[must_use]
    pub fn classify(&self, finding: &PlatformFinding, queried: &Username) -> Classification {
        match self.try_classify(finding, queried) {
            Ok(classification) => {
                debug!(
                    platform = %finding.name,
                    status = %classification.result.status(),
                    confidence = classification.result.confidence(),
                    tier = classification
                        .result
                        .confidence_tier()
                        .map_or("none", |tier| tier.label()),
                    "classified platform"
                );
                classification
            }
            Err(e) => {
                warn!(
                    platform = %finding.name,
                    error = %e,
                    "malformed platform signal, classifying as not found"
                );
                Classification::not_found(PlatformResult::not_found(
                    finding.name.clone(),
                    self.catalog_url(&finding.name, queried.as_str()),
                ))
            }
        }
    }

    fn try_classify(
        &self,
        finding: &PlatformFinding,
        queried: &Username,
    ) -> Result<Classification, SignalError> {
        if finding.name.trim().is_empty() {
            return Err(SignalError::EmptyPlatformName);
        }

        let signal = match finding.raw_signal.as_ref().filter(|v| !v.is_null()) {
            Some(value) => ProviderSignal::parse(value)?,
            None => {
                return Ok(Classification::not_found(PlatformResult::not_found(
                    finding.name.clone(),
                    self.catalog_url(&finding.name, queried.as_str()),
                )))
            }
        };

        let handle = signal.handle().unwrap_or(queried.as_str()).to_string();
        let url = signal
            .url()
            .map(ToString::to_string)
            .unwrap_or_else(|| self.catalog_url(&finding.name, &handle));
        let identifiers = collect_identifiers(&signal);

        let result = match signal.match_kind {
            MatchKind::None => {
                return Ok(Classification::not_found(PlatformResult::not_found(
                    finding.name.clone(),
                    self.catalog_url(&finding.name, queried.as_str()),
                )))
            }
            MatchKind::Profile => {
                let confidence = signal
                    .strength
                    .unwrap_or(self.defaults.default_found_confidence)
                    .clamp(FOUND_CONFIDENCE_FLOOR, 1.0);
                let metadata = signal.profile.map(|p| p.into_metadata());
                PlatformResult::found(finding.name.clone(), url, handle, confidence, metadata)
            }
            MatchKind::Username => {
                let confidence = signal
                    .strength
                    .unwrap_or(self.defaults.default_possible_confidence)
                    .clamp(0.0, POSSIBLE_CONFIDENCE_CEILING);
                PlatformResult::possible(finding.name.clone(), url, handle, confidence)
            }
        };

        Ok(Classification {
            result,
            identifiers,
        })
    }

    fn catalog_url(&self, name: &str, handle: &str) -> String {
        self.catalog.profile_url(name, handle).unwrap_or_default()
    }
}

impl Default for PlatformClassifier {
    fn default() -> Self {
        Self::new(PlatformCatalog::builtin(), ClassifierConfig::default())
    }
}

fn collect_identifiers(signal: &ProviderSignal) -> Vec<(IdentifierKind, String)> {
    let ids = &signal.identifiers;
    [
        (IdentifierKind::RealName, &ids.names),
        (IdentifierKind::Location, &ids.locations),
        (IdentifierKind::Email, &ids.emails),
        (IdentifierKind::Image, &ids.images),
    ]
    .into_iter()
    .flat_map(|(kind, values)| values.iter().map(move |v| (kind, v.clone())))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformStatus;
    use serde_json::json;

    fn queried() -> Username {
        Username::new("octocat").expect("valid username")
    }

    fn classify(finding: &PlatformFinding) -> Classification {
        PlatformClassifier::default().classify(finding, &queried())
    }

    #[test]
    fn test_profile_match_is_found() {
        let finding = PlatformFinding::new(
            "github",
            json!({
                "match": "profile",
                "handle": "octocat",
                "strength": 0.9,
                "profile": { "bio": "cats", "followers": 10 }
            }),
        );

        let c = classify(&finding);
        assert_eq!(c.result.status(), PlatformStatus::Found);
        assert_eq!(c.result.username(), "octocat");
        assert!((c.result.confidence() - 0.9).abs() < f64::EPSILON);
        assert_eq!(c.result.url(), "https://github.com/octocat");
        assert_eq!(
            c.result.metadata().and_then(|m| m.bio.as_deref()),
            Some("cats")
        );
    }

    #[test]
    fn test_found_confidence_floor_and_default() {
        let weak = classify(&PlatformFinding::new(
            "github",
            json!({ "match": "profile", "strength": 0.2 }),
        ));
        assert!((weak.result.confidence() - FOUND_CONFIDENCE_FLOOR).abs() < f64::EPSILON);

        let defaulted = classify(&PlatformFinding::new("github", json!({ "match": "profile" })));
        assert!((defaulted.result.confidence() - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_username_match_is_possible_without_metadata() {
        let finding = PlatformFinding::new(
            "reddit",
            json!({
                "match": "username",
                "strength": 0.95,
                "profile": { "bio": "ignored" }
            }),
        );

        let c = classify(&finding);
        assert_eq!(c.result.status(), PlatformStatus::Possible);
        assert_eq!(c.result.username(), "octocat");
        assert!((c.result.confidence() - POSSIBLE_CONFIDENCE_CEILING).abs() < f64::EPSILON);
        assert!(c.result.metadata().is_none());
        assert_eq!(c.result.url(), "https://www.reddit.com/user/octocat");
    }

    #[test]
    fn test_missing_and_none_signals_are_not_found() {
        for finding in [
            PlatformFinding::empty("gitlab"),
            PlatformFinding::new("gitlab", serde_json::Value::Null),
            PlatformFinding::new("gitlab", json!({ "match": "none", "handle": "x" })),
        ] {
            let c = classify(&finding);
            assert_eq!(c.result.status(), PlatformStatus::NotFound);
            assert_eq!(c.result.username(), "");
            assert!(c.result.metadata().is_none());
            assert!(c.identifiers.is_empty());
            assert_eq!(c.result.url(), "https://gitlab.com/octocat");
        }
    }

    #[test]
    fn test_malformed_signal_is_not_found() {
        for finding in [
            PlatformFinding::new("github", json!("<html>")),
            PlatformFinding::new("github", json!({ "match": "perhaps" })),
            PlatformFinding::new("github", json!({ "match": "profile", "strength": "high" })),
        ] {
            let c = classify(&finding);
            assert_eq!(c.result.status(), PlatformStatus::NotFound);
            assert_eq!(c.result.name(), "github");
        }
    }

    #[test]
    fn test_empty_platform_name_is_not_found() {
        let c = classify(&PlatformFinding::new("  ", json!({ "match": "profile" })));
        assert_eq!(c.result.status(), PlatformStatus::NotFound);
        assert_eq!(c.result.url(), "");
    }

    #[test]
    fn test_unknown_platform_uses_signal_url() {
        let c = classify(&PlatformFinding::new(
            "mastodon",
            json!({ "match": "profile", "url": "https://mastodon.social/@octocat" }),
        ));
        assert_eq!(c.result.url(), "https://mastodon.social/@octocat");

        let no_url = classify(&PlatformFinding::new("mastodon", json!({ "match": "profile" })));
        assert_eq!(no_url.result.url(), "");
    }

    #[test]
    fn test_identifiers_surface_in_kind_order() {
        let c = classify(&PlatformFinding::new(
            "github",
            json!({
                "match": "profile",
                "identifiers": {
                    "emails": ["octo@example.com"],
                    "names": ["The Octocat"]
                }
            }),
        ));

        assert_eq!(
            c.identifiers,
            vec![
                (IdentifierKind::RealName, "The Octocat".to_string()),
                (IdentifierKind::Email, "octo@example.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_configured_defaults_apply() {
        let classifier = PlatformClassifier::new(
            PlatformCatalog::builtin(),
            ClassifierConfig {
                default_found_confidence: 0.8,
                default_possible_confidence: 0.3,
            },
        );

        let profile = PlatformFinding::new("github", json!({ "match": "profile" }));
        let found = classifier.classify(&profile, &queried());
        assert!((found.result.confidence() - 0.8).abs() < f64::EPSILON);

        let username = PlatformFinding::new("github", json!({ "match": "username" }));
        let possible = classifier.classify(&username, &queried());
        assert!((possible.result.confidence() - 0.3).abs() < f64::EPSILON);
    }
}
