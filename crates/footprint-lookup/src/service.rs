//! Lookup service for coordinating provider calls and aggregation.
//!
//! This module provides the `LookupService`, which validates a request,
//! resolves the platforms to query, calls the lookup provider under a timeout
//! and hands the findings to the [`Aggregator`].

use crate::aggregator::{Aggregator, TrackingResult};
use crate::catalog::PlatformCatalog;
use crate::error::{LookupError, Result};
use crate::filter::PlatformFilter;
use crate::platform::PlatformFinding;
use crate::provider::LookupProvider;
use footprint_core::{AppConfig, ConfigError, ConfigResult, PlatformId, Username};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn, Instrument};
use uuid::Uuid;

/// Inbound lookup request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    /// Username to look up (required)
    pub username: String,
    /// Restrict the search to these platform ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
}

impl LookupRequest {
    /// Create an unrestricted request.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            platforms: None,
        }
    }

    /// Restrict the lookup to the given platforms.
    #[must_use]
    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = Some(platforms.into_iter().map(Into::into).collect());
        self
    }
}

/// Runs lookups against a provider.
///
/// Cloning is cheap and clones share the provider; independent lookups may
/// run concurrently.
#[derive(Clone)]
pub struct LookupService {
    provider: Arc<dyn LookupProvider>,
    catalog: PlatformCatalog,
    aggregator: Aggregator,
    default_platforms: Vec<PlatformId>,
    max_platforms: usize,
    timeout: Duration,
}

impl LookupService {
    /// Create a lookup service from configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if a configured default platform is
    /// malformed or missing from the catalog.
    pub fn new(
        provider: Arc<dyn LookupProvider>,
        catalog: PlatformCatalog,
        config: &AppConfig,
    ) -> ConfigResult<Self> {
        let default_platforms = if config.lookup.default_platforms.is_empty() {
            catalog.ids()
        } else {
            let mut ids = Vec::with_capacity(config.lookup.default_platforms.len());
            for raw in &config.lookup.default_platforms {
                let id = PlatformId::new(raw)
                    .ok()
                    .filter(|id| catalog.contains(id))
                    .ok_or_else(|| ConfigError::InvalidValue {
                        field: "lookup.default_platforms".to_string(),
                        reason: format!("unknown platform '{raw}'"),
                    })?;
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            ids
        };

        Ok(Self {
            provider,
            aggregator: Aggregator::from_config(config, catalog.clone()),
            catalog,
            default_platforms,
            max_platforms: config.lookup.max_platforms,
            timeout: Duration::from_secs(config.lookup.timeout_secs),
        })
    }

    /// Override the provider timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Platform catalog used to validate requests.
    #[must_use]
    pub fn catalog(&self) -> &PlatformCatalog {
        &self.catalog
    }

    /// Platforms queried when a request is unrestricted.
    #[must_use]
    pub fn default_platforms(&self) -> &[PlatformId] {
        &self.default_platforms
    }

    /// Run one lookup.
    ///
    /// # Errors
    /// - `InvalidRequest` if the username or platform restriction is invalid;
    ///   the provider is not called.
    /// - `LookupUnavailable` if the provider fails or times out; no partial
    ///   result is returned.
    pub async fn lookup(&self, request: &LookupRequest) -> Result<TrackingResult> {
        let lookup_id = Uuid::new_v4();
        let span = tracing::info_span!("lookup", %lookup_id);
        self.run_lookup(request).instrument(span).await
    }

    async fn run_lookup(&self, request: &LookupRequest) -> Result<TrackingResult> {
        let username = Username::new(&request.username).map_err(|e| {
            debug!("Rejected lookup request: {}", e);
            LookupError::from(e)
        })?;

        let filter = PlatformFilter::from_request(
            request.platforms.as_deref(),
            &self.catalog,
            self.max_platforms,
        )?;
        let platforms = filter.resolve(&self.default_platforms);

        debug!(
            %username,
            platforms = platforms.len(),
            provider = self.provider.provider_id(),
            "querying lookup provider"
        );

        let findings = self.fetch(&username, &platforms).await?;
        let findings = align_to_query(&platforms, findings);
        let result = self
            .aggregator
            .aggregate_for(&username, &findings, Vec::new(), Vec::new());

        info!(
            %username,
            found = result.found(),
            exposure = result.digital_exposure(),
            band = %result.exposure_band(),
            "lookup complete"
        );

        Ok(result)
    }

    async fn fetch(
        &self,
        username: &Username,
        platforms: &[PlatformId],
    ) -> Result<Vec<PlatformFinding>> {
        let provider_id = self.provider.provider_id().to_string();

        match tokio::time::timeout(self.timeout, self.provider.lookup(username, platforms)).await {
            Ok(Ok(findings)) => Ok(findings),
            Ok(Err(e)) => {
                error!("Lookup provider {} failed: {}", provider_id, e);
                Err(LookupError::LookupUnavailable {
                    provider: provider_id,
                    reason: e.to_string(),
                })
            }
            Err(_) => {
                error!(
                    "Lookup provider {} timed out after {:?}",
                    provider_id, self.timeout
                );
                Err(LookupError::LookupUnavailable {
                    provider: provider_id,
                    reason: format!("timed out after {:?}", self.timeout),
                })
            }
        }
    }
}

/// Order provider findings by the queried platforms.
///
/// Each queried platform gets the first finding whose name matches it
/// (case-insensitively), or an empty finding. Findings for platforms that
/// were not queried are dropped.
fn align_to_query(
    platforms: &[PlatformId],
    findings: Vec<PlatformFinding>,
) -> Vec<PlatformFinding> {
    let mut remaining: Vec<Option<PlatformFinding>> = findings.into_iter().map(Some).collect();

    let aligned = platforms
        .iter()
        .map(|platform| {
            remaining
                .iter_mut()
                .find(|slot| {
                    slot.as_ref()
                        .is_some_and(|f| f.name.trim().eq_ignore_ascii_case(platform.as_str()))
                })
                .and_then(Option::take)
                .map(|finding| PlatformFinding {
                    name: platform.as_str().to_string(),
                    raw_signal: finding.raw_signal,
                })
                .unwrap_or_else(|| PlatformFinding::empty(platform.as_str()))
        })
        .collect();

    for extra in remaining.into_iter().flatten() {
        warn!(platform = %extra.name, "dropping finding for a platform that was not queried");
    }

    aligned
}
