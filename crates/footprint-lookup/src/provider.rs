//! Lookup provider trait and an in-memory implementation.

use crate::error::ProviderError;
use crate::platform::PlatformFinding;
use async_trait::async_trait;
use footprint_core::{PlatformId, Username};
use std::collections::HashMap;

/// Source of raw per-platform findings.
///
/// Implementations own all network access. They should be thread-safe
/// (Send + Sync) for use across concurrent lookups.
#[async_trait]
pub trait LookupProvider: Send + Sync {
    /// Fetch raw findings for a username on the given platforms.
    ///
    /// # Errors
    /// Returns error if the provider cannot serve the request as a whole.
    /// Per-platform problems should be reported as findings, not errors.
    async fn lookup(
        &self,
        username: &Username,
        platforms: &[PlatformId],
    ) -> Result<Vec<PlatformFinding>, ProviderError>;

    /// Get the unique identifier for this provider.
    fn provider_id(&self) -> &str;
}

/// Provider backed by a fixed table of findings per username.
///
/// Usernames are matched case-insensitively. Requested platforms without an
/// entry are reported with no signal.
#[derive(Debug, Clone, Default)]
pub struct StaticLookupProvider {
    findings: HashMap<String, Vec<PlatformFinding>>,
}

impl StaticLookupProvider {
    /// Create an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register findings for a username.
    #[must_use]
    pub fn with_findings(mut self, username: &str, findings: Vec<PlatformFinding>) -> Self {
        self.findings.insert(key(username), findings);
        self
    }

    /// Load a fixture of the form `{ "username": [ {"name": ..., "rawSignal": ...} ] }`.
    ///
    /// # Errors
    /// Returns error if the JSON does not match the fixture shape.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let table: HashMap<String, Vec<PlatformFinding>> = serde_json::from_str(json)?;
        Ok(Self {
            findings: table.into_iter().map(|(k, v)| (key(&k), v)).collect(),
        })
    }
}

fn key(username: &str) -> String {
    username.trim().trim_start_matches('@').to_lowercase()
}

#[async_trait]
impl LookupProvider for StaticLookupProvider {
    async fn lookup(
        &self,
        username: &Username,
        platforms: &[PlatformId],
    ) -> Result<Vec<PlatformFinding>, ProviderError> {
        let known = self
            .findings
            .get(&key(username.as_str()))
            .map(Vec::as_slice)
            .unwrap_or_default();

        Ok(platforms
            .iter()
            .map(|platform| {
                known
                    .iter()
                    .find(|f| f.name.eq_ignore_ascii_case(platform.as_str()))
                    .cloned()
                    .unwrap_or_else(|| PlatformFinding::empty(platform.as_str()))
            })
            .collect())
    }

    fn provider_id(&self) -> &str {
        "static"
    }
}
