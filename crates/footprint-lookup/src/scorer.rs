//! Digital exposure scoring.
//!
//! The score starts from a confidence-weighted contribution per found and
//! possible platform, adds a fixed contribution for each identifier category
//! discovered at least once, and is clamped to `[0, 10]`. The reported score
//! is rounded to one decimal place and the band is taken from the rounded
//! value, so the two always agree when displayed. With non-negative
//! weights the score never decreases as platforms, confidence or identifier
//! categories are added.

use crate::identifiers::IdentifierSet;
use crate::platform::{PlatformResult, PlatformStatus};
use footprint_core::{IdentifierKind, ScoringConfig};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the exposure score.
pub const MAX_EXPOSURE_SCORE: f64 = 10.0;

/// Inclusive upper bound of the "Very Low" band.
pub const VERY_LOW_MAX: f64 = 2.0;
/// Inclusive upper bound of the "Low" band.
pub const LOW_MAX: f64 = 4.0;
/// Inclusive upper bound of the "Moderate" band.
pub const MODERATE_MAX: f64 = 6.0;
/// Inclusive upper bound of the "High" band.
pub const HIGH_MAX: f64 = 8.0;

/// Human-readable exposure band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExposureBand {
    #[serde(rename = "Very Low")]
    VeryLow,
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl ExposureBand {
    /// Band for a score; upper bounds are inclusive.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() || score <= VERY_LOW_MAX {
            Self::VeryLow
        } else if score <= LOW_MAX {
            Self::Low
        } else if score <= MODERATE_MAX {
            Self::Moderate
        } else if score <= HIGH_MAX {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for ExposureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Number of distinct identifiers discovered per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentifierCounts {
    pub names: usize,
    pub locations: usize,
    pub emails: usize,
    pub images: usize,
}

impl IdentifierCounts {
    #[must_use]
    pub fn get(&self, kind: IdentifierKind) -> usize {
        match kind {
            IdentifierKind::RealName => self.names,
            IdentifierKind::Location => self.locations,
            IdentifierKind::Email => self.emails,
            IdentifierKind::Image => self.images,
        }
    }
}

impl From<&IdentifierSet> for IdentifierCounts {
    fn from(set: &IdentifierSet) -> Self {
        Self {
            names: set.count(IdentifierKind::RealName),
            locations: set.count(IdentifierKind::Location),
            emails: set.count(IdentifierKind::Email),
            images: set.count(IdentifierKind::Image),
        }
    }
}

/// Score and band for one lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposureScore {
    pub score: f64,
    pub band: ExposureBand,
}

/// Pure exposure scorer.
#[derive(Debug, Clone, Default)]
pub struct ExposureScorer {
    weights: ScoringConfig,
}

impl ExposureScorer {
    /// Create a scorer. Weights are expected to have passed
    /// [`AppConfig::validate`](footprint_core::AppConfig::validate).
    #[must_use]
    pub fn new(weights: ScoringConfig) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn score(&self, platforms: &[PlatformResult], counts: &IdentifierCounts) -> ExposureScore {
        let platform_total: f64 = platforms
            .iter()
            .map(|p| match p.status() {
                PlatformStatus::Found => self.weights.found_weight * p.confidence(),
                PlatformStatus::Possible => self.weights.possible_weight * p.confidence(),
                PlatformStatus::NotFound => 0.0,
            })
            .sum();

        let identifier_total: f64 = IdentifierKind::ALL
            .iter()
            .filter(|kind| counts.get(**kind) > 0)
            .map(|kind| self.category_weight(*kind))
            .sum();

        let raw = platform_total + identifier_total;
        let score = if raw.is_finite() {
            round_to_tenth(raw.clamp(0.0, MAX_EXPOSURE_SCORE))
        } else {
            MAX_EXPOSURE_SCORE
        };

        ExposureScore {
            score,
            band: ExposureBand::from_score(score),
        }
    }

    fn category_weight(&self, kind: IdentifierKind) -> f64 {
        match kind {
            IdentifierKind::RealName => self.weights.name_weight,
            IdentifierKind::Location => self.weights.location_weight,
            IdentifierKind::Email => self.weights.email_weight,
            IdentifierKind::Image => self.weights.image_weight,
        }
    }
}

fn round_to_tenth(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(name: &str, confidence: f64) -> PlatformResult {
        PlatformResult::found(name, "", "octocat", confidence, None)
    }

    #[test]
    fn test_band_boundaries() {
        let cases = [
            (0.0, ExposureBand::VeryLow),
            (2.0, ExposureBand::VeryLow),
            (2.01, ExposureBand::Low),
            (4.0, ExposureBand::Low),
            (4.01, ExposureBand::Moderate),
            (6.0, ExposureBand::Moderate),
            (6.01, ExposureBand::High),
            (8.0, ExposureBand::High),
            (8.01, ExposureBand::VeryHigh),
            (10.0, ExposureBand::VeryHigh),
        ];

        for (score, band) in cases {
            assert_eq!(ExposureBand::from_score(score), band, "score {score}");
        }
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(ExposureBand::VeryLow.to_string(), "Very Low");
        assert_eq!(
            serde_json::to_string(&ExposureBand::VeryHigh).expect("serialize band"),
            r#""Very High""#
        );
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let result = ExposureScorer::default().score(&[], &IdentifierCounts::default());
        assert!(result.score.abs() < f64::EPSILON);
        assert_eq!(result.band, ExposureBand::VeryLow);
    }

    #[test]
    fn test_platform_contributions() {
        let scorer = ExposureScorer::default();
        let platforms = vec![
            found("github", 0.9),
            PlatformResult::possible("reddit", "", "octocat", 0.5),
            PlatformResult::not_found("gitlab", ""),
        ];

        let result = scorer.score(&platforms, &IdentifierCounts::default());
        // 1.5 * 0.9 + 0.5 * 0.5
        assert!((result.score - 1.6).abs() < 1e-9);
        assert_eq!(result.band, ExposureBand::VeryLow);
    }

    #[test]
    fn test_identifier_categories_count_once() {
        let scorer = ExposureScorer::default();
        let one = IdentifierCounts {
            emails: 1,
            ..Default::default()
        };
        let many = IdentifierCounts {
            emails: 12,
            ..Default::default()
        };

        assert!(
            (scorer.score(&[], &one).score - scorer.score(&[], &many).score).abs() < f64::EPSILON
        );
        assert!((scorer.score(&[], &one).score - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_is_clamped() {
        let platforms: Vec<_> = (0..20).map(|i| found(&format!("p{i}"), 1.0)).collect();
        let counts = IdentifierCounts {
            names: 1,
            locations: 1,
            emails: 1,
            images: 1,
        };

        let result = ExposureScorer::default().score(&platforms, &counts);
        assert!((result.score - MAX_EXPOSURE_SCORE).abs() < f64::EPSILON);
        assert_eq!(result.band, ExposureBand::VeryHigh);
    }

    #[test]
    fn test_monotonic_in_found_platforms() {
        let scorer = ExposureScorer::default();
        let counts = IdentifierCounts {
            names: 1,
            ..Default::default()
        };

        let mut platforms = Vec::new();
        let mut previous = scorer.score(&platforms, &counts).score;
        for (i, confidence) in [0.7, 0.95, 0.8, 1.0, 0.75, 0.9, 0.7, 0.85].iter().enumerate() {
            platforms.push(found(&format!("p{i}"), *confidence));
            let current = scorer.score(&platforms, &counts).score;
            assert!(current >= previous, "score decreased at platform {i}");
            previous = current;
        }
    }

    #[test]
    fn test_monotonic_in_confidence() {
        let scorer = ExposureScorer::default();
        let low = scorer.score(&[found("github", 0.7)], &IdentifierCounts::default());
        let high = scorer.score(&[found("github", 0.95)], &IdentifierCounts::default());
        assert!(high.score > low.score);
    }

    #[test]
    fn test_deterministic() {
        let scorer = ExposureScorer::default();
        let platforms = vec![found("github", 0.83), found("gitlab", 0.71)];
        let counts = IdentifierCounts {
            locations: 2,
            ..Default::default()
        };
        assert_eq!(
            scorer.score(&platforms, &counts),
            scorer.score(&platforms, &counts)
        );
    }

    #[test]
    fn test_custom_weights() {
        let scorer = ExposureScorer::new(ScoringConfig {
            found_weight: 2.0,
            email_weight: 0.0,
            ..Default::default()
        });
        let counts = IdentifierCounts {
            emails: 3,
            ..Default::default()
        };
        let result = scorer.score(&[found("github", 1.0)], &counts);
        assert!((result.score - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_band_follows_rounded_score() {
        let just_above = ExposureScorer::new(ScoringConfig {
            found_weight: 2.04,
            ..Default::default()
        })
        .score(&[found("github", 1.0)], &IdentifierCounts::default());
        assert!((just_above.score - 2.0).abs() < f64::EPSILON);
        assert_eq!(just_above.band, ExposureBand::VeryLow);

        let rounds_up = ExposureScorer::new(ScoringConfig {
            found_weight: 2.06,
            ..Default::default()
        })
        .score(&[found("github", 1.0)], &IdentifierCounts::default());
        assert!((rounds_up.score - 2.1).abs() < f64::EPSILON);
        assert_eq!(rounds_up.band, ExposureBand::Low);
    }
}
