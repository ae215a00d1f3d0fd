//! Footprint Core - Foundation crate for the username footprint lookup.
//!
//! This crate provides shared types, error handling and configuration
//! management that the lookup and application crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Validated newtypes and enums (`Username`, `PlatformId`, `IdentifierKind`)
//!
//! # Example
//!
//! ```rust
//! use footprint_core::{AppConfig, Username};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//!
//! let username = Username::new("@octocat")?;
//! assert_eq!(username.as_str(), "octocat");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, ClassifierConfig, LoggingConfig, LookupConfig, ScoringConfig};
pub use error::{ConfigError, ConfigResult, FootprintError};
pub use types::{IdentifierKind, PlatformId, Username};
