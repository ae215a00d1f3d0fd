//! Footprint Lookup - username exposure classification and scoring.
//!
//! This crate turns raw per-platform findings from a lookup provider into a
//! single immutable [`TrackingResult`]: each finding is classified as found,
//! possible or not found, discovered identifiers are collected, and the
//! lookup is given a 0-10 digital exposure score with a five-level band.
//!
//! # Features
//!
//! - Per-platform failure isolation: malformed signals classify as not found
//! - Documented confidence tiers and exposure band thresholds
//! - Built-in platform catalog with profile URL templates
//! - Derived risk notes and recommended actions
//! - Provider calls under a timeout, surfaced as `LookupUnavailable`
//!
//! # Example
//!
//! ```rust,ignore
//! use footprint_lookup::{LookupRequest, LookupService, PlatformCatalog};
//! use std::sync::Arc;
//!
//! let service = LookupService::new(
//!     Arc::new(provider),
//!     PlatformCatalog::builtin(),
//!     &config,
//! )?;
//!
//! let result = service.lookup(&LookupRequest::new("octocat")).await?;
//! println!("{} ({})", result.digital_exposure(), result.exposure_band());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

/// Derived risk notes and recommendations.
#[allow(missing_docs)]
pub mod advisories;
/// Result aggregation.
#[allow(missing_docs)]
pub mod aggregator;
/// Known platforms and profile URLs.
#[allow(missing_docs)]
pub mod catalog;
pub mod classifier;
/// Error types for lookups.
#[allow(missing_docs)]
pub mod error;
/// Platform restriction for lookup requests.
#[allow(missing_docs)]
pub mod filter;
#[allow(missing_docs)]
pub mod identifiers;
/// Per-platform input and output types.
#[allow(missing_docs)]
pub mod platform;
pub mod provider;
#[allow(missing_docs)]
pub mod scorer;
pub mod service;
/// Provider signal decoding.
#[allow(missing_docs)]
pub mod signal;

// Re-export commonly used types
pub use advisories::Advisories;
pub use aggregator::{Aggregator, TrackingResult};
pub use catalog::{PlatformCatalog, PlatformCategory, PlatformDefinition};
pub use classifier::{Classification, PlatformClassifier};
pub use error::{LookupError, ProviderError, Result, SignalError};
pub use filter::PlatformFilter;
pub use identifiers::IdentifierSet;
pub use platform::{
    ConfidenceTier, PlatformFinding, PlatformResult, PlatformStatus, ProfileMetadata,
};
pub use provider::{LookupProvider, StaticLookupProvider};
pub use scorer::{ExposureBand, ExposureScore, ExposureScorer, IdentifierCounts};
pub use service::{LookupRequest, LookupService};
