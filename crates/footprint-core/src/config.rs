//! Configuration management for footprint.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration.
///
/// This is loaded from `~/.config/footprint/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Lookup request handling
    pub lookup: LookupConfig,
    /// Platform classification defaults
    pub classifier: ClassifierConfig,
    /// Exposure score weights
    pub scoring: ScoringConfig,
    /// Log filtering
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML or fail validation
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, falling back to defaults if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let config: Self = if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            let contents = fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            tracing::debug!("Config file not found, using defaults");
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `FOOTPRINT_LOOKUP_TIMEOUT_SECS`: Override the provider timeout
    /// - `FOOTPRINT_DERIVE_ADVISORIES`: Override advisory derivation (true/false)
    /// - `FOOTPRINT_LOG_FILTER`: Override the tracing filter directive
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable source. Unparseable values are ignored.
    pub fn apply_env_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("FOOTPRINT_LOOKUP_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.lookup.timeout_secs = secs;
                tracing::debug!("Override lookup.timeout_secs from env: {}", secs);
            }
        }

        if let Some(val) = var("FOOTPRINT_DERIVE_ADVISORIES") {
            if let Ok(derive) = val.parse() {
                self.lookup.derive_advisories = derive;
                tracing::debug!("Override lookup.derive_advisories from env: {}", derive);
            }
        }

        if let Some(val) = var("FOOTPRINT_LOG_FILTER") {
            if !val.trim().is_empty() {
                tracing::debug!("Override logging.filter from env: {}", val);
                self.logging.filter = val;
            }
        }
    }

    /// Check that every value is within its supported range.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.lookup.timeout_secs == 0 {
            return Err(invalid("lookup.timeout_secs", "must be greater than zero"));
        }
        if self.lookup.max_platforms == 0 {
            return Err(invalid("lookup.max_platforms", "must be greater than zero"));
        }

        self.classifier.validate()?;
        self.scoring.validate()
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/footprint/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("com", "footprint", "footprint").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// Lookup request settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Provider call timeout in seconds
    pub timeout_secs: u64,
    /// Maximum number of platforms a single request may name
    pub max_platforms: usize,
    /// Platforms queried when a request does not restrict the search.
    /// Empty means every catalog platform.
    pub default_platforms: Vec<String>,
    /// Derive risk notes and recommendations when the caller supplies none
    pub derive_advisories: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            max_platforms: 32,
            default_platforms: Vec::new(),
            derive_advisories: true,
        }
    }
}

/// Classifier defaults applied when a signal omits its strength.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Confidence assigned to a verified profile match without a strength
    pub default_found_confidence: f64,
    /// Confidence assigned to a bare username match without a strength
    pub default_possible_confidence: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            default_found_confidence: 0.9,
            default_possible_confidence: 0.5,
        }
    }
}

impl ClassifierConfig {
    fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            (
                "classifier.default_found_confidence",
                self.default_found_confidence,
            ),
            (
                "classifier.default_possible_confidence",
                self.default_possible_confidence,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be within [0, 1]"));
            }
        }
        Ok(())
    }
}

/// Weights used by the exposure scorer.
///
/// Weights must be finite and non-negative so the score stays monotonic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Contribution per found platform, multiplied by its confidence
    pub found_weight: f64,
    /// Contribution per possible platform, multiplied by its confidence
    pub possible_weight: f64,
    /// Contribution when at least one real name was discovered
    pub name_weight: f64,
    /// Contribution when at least one location was discovered
    pub location_weight: f64,
    /// Contribution when at least one email was discovered
    pub email_weight: f64,
    /// Contribution when at least one image was discovered
    pub image_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            found_weight: 1.5,
            possible_weight: 0.5,
            name_weight: 1.0,
            location_weight: 1.0,
            email_weight: 1.5,
            image_weight: 0.5,
        }
    }
}

impl ScoringConfig {
    fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("scoring.found_weight", self.found_weight),
            ("scoring.possible_weight", self.possible_weight),
            ("scoring.name_weight", self.name_weight),
            ("scoring.location_weight", self.location_weight),
            ("scoring.email_weight", self.email_weight),
            ("scoring.image_weight", self.image_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a finite, non-negative number"));
            }
        }
        Ok(())
    }
}

/// Log filtering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,footprint=debug".to_string(),
        }
    }
}
