//! Result aggregation.
//!
//! Runs the classifier over every finding in query order, collects the
//! discovered identifiers, scores the lookup and assembles the immutable
//! [`TrackingResult`].

use crate::advisories;
use crate::catalog::PlatformCatalog;
use crate::classifier::PlatformClassifier;
use crate::error::Result;
use crate::identifiers::IdentifierSet;
use crate::platform::{PlatformFinding, PlatformResult, PlatformStatus};
use crate::scorer::{ExposureBand, ExposureScore, ExposureScorer, IdentifierCounts};
use footprint_core::{AppConfig, Username};
use serde::Serialize;

/// Outcome of one username lookup.
///
/// Built once by [`Aggregator`] and never mutated. `found` always equals the
/// number of `Found` entries in `platforms`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingResult {
    summary: String,
    found: usize,
    digital_exposure: f64,
    platforms: Vec<PlatformResult>,
    possible_real_names: Vec<String>,
    possible_locations: Vec<String>,
    possible_emails: Vec<String>,
    image_urls: Vec<String>,
    risks_identified: Vec<String>,
    recommended_actions: Vec<String>,
}

impl TrackingResult {
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn found(&self) -> usize {
        self.found
    }

    /// Exposure score in `[0, 10]`.
    #[must_use]
    pub fn digital_exposure(&self) -> f64 {
        self.digital_exposure
    }

    #[must_use]
    pub fn exposure_band(&self) -> ExposureBand {
        ExposureBand::from_score(self.digital_exposure)
    }

    /// Classified platforms in query order.
    #[must_use]
    pub fn platforms(&self) -> &[PlatformResult] {
        &self.platforms
    }

    #[must_use]
    pub fn possible_real_names(&self) -> &[String] {
        &self.possible_real_names
    }

    #[must_use]
    pub fn possible_locations(&self) -> &[String] {
        &self.possible_locations
    }

    #[must_use]
    pub fn possible_emails(&self) -> &[String] {
        &self.possible_emails
    }

    #[must_use]
    pub fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    #[must_use]
    pub fn risks_identified(&self) -> &[String] {
        &self.risks_identified
    }

    #[must_use]
    pub fn recommended_actions(&self) -> &[String] {
        &self.recommended_actions
    }
}

/// Assembles [`TrackingResult`]s from provider findings.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    classifier: PlatformClassifier,
    scorer: ExposureScorer,
    derive_advisories: bool,
}

impl Aggregator {
    #[must_use]
    pub fn new(classifier: PlatformClassifier, scorer: ExposureScorer) -> Self {
        Self {
            classifier,
            scorer,
            derive_advisories: false,
        }
    }

    /// Build an aggregator from application configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig, catalog: PlatformCatalog) -> Self {
        Self::new(
            PlatformClassifier::new(catalog, config.classifier.clone()),
            ExposureScorer::new(config.scoring.clone()),
        )
        .with_derived_advisories(config.lookup.derive_advisories)
    }

    /// Derive risks and recommendations when the caller passes empty lists.
    #[must_use]
    pub fn with_derived_advisories(mut self, derive: bool) -> Self {
        self.derive_advisories = derive;
        self
    }

    /// Aggregate findings for a username.
    ///
    /// # Errors
    /// Returns `LookupError::InvalidRequest` if the username is empty or invalid.
    pub fn aggregate(
        &self,
        username: &str,
        findings: &[PlatformFinding],
        risk_notes: Vec<String>,
        recommendations: Vec<String>,
    ) -> Result<TrackingResult> {
        let username = Username::new(username)?;
        Ok(self.aggregate_for(&username, findings, risk_notes, recommendations))
    }

    /// Aggregate findings for an already validated username.
    #[must_use]
    pub fn aggregate_for(
        &self,
        username: &Username,
        findings: &[PlatformFinding],
        risk_notes: Vec<String>,
        recommendations: Vec<String>,
    ) -> TrackingResult {
        let mut identifiers = IdentifierSet::new();
        let mut platforms = Vec::with_capacity(findings.len());

        for finding in findings {
            let classification = self.classifier.classify(finding, username);
            for (kind, value) in &classification.identifiers {
                identifiers.insert(*kind, value);
            }
            platforms.push(classification.result);
        }

        let found = count_status(&platforms, PlatformStatus::Found);
        let possible = count_status(&platforms, PlatformStatus::Possible);
        let exposure = self
            .scorer
            .score(&platforms, &IdentifierCounts::from(&identifiers));

        let (risks_identified, recommended_actions) =
            if self.derive_advisories && (risk_notes.is_empty() || recommendations.is_empty()) {
                let derived = advisories::assess(&platforms, &identifiers);
                (
                    non_empty_or(risk_notes, derived.risks),
                    non_empty_or(recommendations, derived.recommendations),
                )
            } else {
                (risk_notes, recommendations)
            };

        let summary = summarize(username, platforms.len(), found, possible, exposure);
        let (names, locations, emails, images) = identifiers.into_parts();

        TrackingResult {
            summary,
            found,
            digital_exposure: exposure.score,
            platforms,
            possible_real_names: names,
            possible_locations: locations,
            possible_emails: emails,
            image_urls: images,
            risks_identified,
            recommended_actions,
        }
    }
}

fn count_status(platforms: &[PlatformResult], status: PlatformStatus) -> usize {
    platforms.iter().filter(|p| p.status() == status).count()
}

fn non_empty_or(given: Vec<String>, fallback: Vec<String>) -> Vec<String> {
    if given.is_empty() {
        fallback
    } else {
        given
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

fn summarize(
    username: &Username,
    total: usize,
    found: usize,
    possible: usize,
    exposure: ExposureScore,
) -> String {
    format!(
        "Found {} and {} for '{}' across {}. Digital exposure: {:.1}/10 ({}).",
        plural(found, "profile", "profiles"),
        plural(possible, "possible match", "possible matches"),
        username,
        plural(total, "platform", "platforms"),
        exposure.score,
        exposure.band,
    )
}
