//! Risk notes and recommended actions derived from a classified lookup.

use crate::identifiers::IdentifierSet;
use crate::platform::{PlatformResult, PlatformStatus};
use footprint_core::IdentifierKind;

/// Found platforms at which cross-platform correlation is reported.
pub const CORRELATION_THRESHOLD: usize = 3;

/// Derived free-text advisories, in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Advisories {
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Advisories {
    fn push(&mut self, risk: impl Into<String>, recommendation: impl Into<String>) {
        self.risks.push(risk.into());
        self.recommendations.push(recommendation.into());
    }
}

/// Derive advisories from classified platforms and discovered identifiers.
#[must_use]
pub fn assess(platforms: &[PlatformResult], identifiers: &IdentifierSet) -> Advisories {
    let found = count_status(platforms, PlatformStatus::Found);
    let possible = count_status(platforms, PlatformStatus::Possible);
    let mut advisories = Advisories::default();

    if identifiers.count(IdentifierKind::Email) > 0 {
        advisories.push(
            "Email addresses linked to this username are publicly discoverable, \
             increasing phishing and credential-stuffing risk.",
            "Use a dedicated alias address for public profiles and enable \
             two-factor authentication on every account.",
        );
    }

    if found >= CORRELATION_THRESHOLD {
        advisories.push(
            format!(
                "The same username is active on {found} platforms, making \
                 cross-platform profiling straightforward."
            ),
            "Use distinct usernames for accounts that should not be linked.",
        );
    }

    if identifiers.count(IdentifierKind::Location) > 0 {
        advisories.push(
            "Location details tied to this username could reveal your physical whereabouts.",
            "Remove or generalise location information in public profiles.",
        );
    }

    if identifiers.count(IdentifierKind::RealName) > 0 {
        advisories.push(
            "Your real name can be linked to this username.",
            "Review which profiles display your full name and limit it where possible.",
        );
    }

    if identifiers.count(IdentifierKind::Image) > 0 {
        advisories.push(
            "Profile images could be used for reverse image searches that connect your accounts.",
            "Use different profile pictures on unrelated platforms.",
        );
    }

    if possible > 0 {
        advisories.push(
            "Unverified accounts using this username may belong to someone else \
             or impersonate you.",
            "Review possible matches and report any account impersonating you.",
        );
    }

    if found > 0 {
        if found < CORRELATION_THRESHOLD {
            let profiles = if found == 1 {
                "A public profile uses".to_string()
            } else {
                format!("{found} public profiles use")
            };
            advisories.risks.push(format!(
                "{profiles} this username; anything posted there can be collected by anyone."
            ));
        }
        advisories
            .recommendations
            .push("Audit the privacy settings of each discovered profile.".to_string());
    }

    if found == 0 && possible == 0 {
        advisories
            .risks
            .push("No significant exposure was identified for this username.".to_string());
        advisories
            .recommendations
            .push("Keep monitoring this username periodically.".to_string());
    }

    advisories
}

fn count_status(platforms: &[PlatformResult], status: PlatformStatus) -> usize {
    platforms.iter().filter(|p| p.status() == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(name: &str) -> PlatformResult {
        PlatformResult::found(name, "", "octocat", 0.9, None)
    }

    #[test]
    fn test_nothing_found() {
        let platforms = vec![PlatformResult::not_found("github", "")];
        let advisories = assess(&platforms, &IdentifierSet::new());

        assert_eq!(advisories.risks.len(), 1);
        assert!(advisories.risks[0].contains("No significant exposure"));
        assert_eq!(
            advisories.recommendations,
            vec!["Keep monitoring this username periodically."]
        );
    }

    #[test]
    fn test_email_exposure_comes_first() {
        let mut identifiers = IdentifierSet::new();
        identifiers.insert(IdentifierKind::Location, "Berlin");
        identifiers.insert(IdentifierKind::Email, "octo@example.com");

        let advisories = assess(&[found("github")], &identifiers);
        assert!(advisories.risks[0].contains("Email addresses"));
        assert!(advisories.risks[1].contains("Location details"));
        assert_eq!(
            advisories.recommendations.last().map(String::as_str),
            Some("Audit the privacy settings of each discovered profile.")
        );
    }

    #[test]
    fn test_correlation_threshold() {
        let two = assess(&[found("a"), found("b")], &IdentifierSet::new());
        assert!(!two.risks.iter().any(|r| r.contains("cross-platform")));

        let three = assess(&[found("a"), found("b"), found("c")], &IdentifierSet::new());
        assert!(three.risks[0].contains("active on 3 platforms"));
    }

    #[test]
    fn test_possible_matches_flag_impersonation() {
        let platforms = vec![PlatformResult::possible("reddit", "", "octocat", 0.5)];
        let advisories = assess(&platforms, &IdentifierSet::new());
        assert!(advisories.risks[0].contains("impersonate"));
        assert_eq!(advisories.recommendations.len(), 1);
    }

    #[test]
    fn test_single_profile_without_identifiers() {
        let advisories = assess(&[found("github")], &IdentifierSet::new());

        assert_eq!(advisories.risks.len(), 1);
        assert!(advisories.risks[0].starts_with("A public profile uses this username"));
        assert!(!advisories
            .risks
            .iter()
            .any(|r| r.contains("No significant exposure")));
        assert_eq!(
            advisories.recommendations,
            vec!["Audit the privacy settings of each discovered profile."]
        );
    }
}
