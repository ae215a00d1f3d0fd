//! Core error types for the footprint lookup.
//!
//! Subsystem errors are represented as variants so they propagate cleanly
//! across crate boundaries.

use thiserror::Error;

/// Central error type for shared footprint operations.
#[derive(Error, Debug)]
pub enum FootprintError {
    /// Validation errors (invalid input, constraints)
    #[error("validation error: {0}")]
    Validation(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// I/O error reading config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FootprintError::Validation("username must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "validation error: username must not be empty"
        );

        let err = ConfigError::InvalidValue {
            field: "scoring.found_weight".to_string(),
            reason: "must be non-negative".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for scoring.found_weight: must be non-negative"
        );
    }

    #[test]
    fn test_config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
