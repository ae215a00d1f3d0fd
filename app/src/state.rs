//! Application state management.

use footprint_core::AppConfig;
use footprint_lookup::{LookupProvider, LookupService, PlatformCatalog};
use std::sync::Arc;

/// State shared across all commands.
#[derive(Clone)]
pub struct AppState {
    /// Effective configuration (file, then environment overrides)
    pub config: AppConfig,

    /// Lookup service; clones share the provider
    pub service: LookupService,
}

impl AppState {
    /// Build state around a provider with the built-in platform catalog.
    ///
    /// # Errors
    /// Returns error if the configured default platforms are not in the catalog.
    pub fn new(
        config: AppConfig,
        provider: Arc<dyn LookupProvider>,
    ) -> footprint_core::ConfigResult<Self> {
        let service = LookupService::new(provider, PlatformCatalog::builtin(), &config)?;
        tracing::info!(
            platforms = service.default_platforms().len(),
            timeout_secs = config.lookup.timeout_secs,
            "lookup service ready"
        );
        Ok(Self { config, service })
    }
}
