//! Footprint Application Shell
//!
//! This is the thin application shell that loads configuration, installs
//! logging and exposes lookup commands.
//! Core business logic lives in the `crates/` directory.

pub mod commands;
pub mod error;
pub mod state;

use anyhow::Context;
use footprint_core::AppConfig;
use footprint_lookup::LookupProvider;
use state::AppState;
use std::sync::Arc;
use tracing::info;

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();
}

/// Load configuration, install logging and build the application state.
pub fn bootstrap(provider: Arc<dyn LookupProvider>) -> anyhow::Result<AppState> {
    let config = AppConfig::load_with_env().context("failed to load configuration")?;
    init_tracing(&config.logging.filter);

    info!("Starting Footprint v{}", env!("CARGO_PKG_VERSION"));

    AppState::new(config, provider).context("failed to initialise lookup service")
}
