use footprint_core::FootprintError;
use thiserror::Error;

/// Request-level failures. These are the only errors that leave the core.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request was rejected before any aggregation was attempted.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The lookup provider could not be reached, errored or timed out.
    #[error("lookup unavailable from provider {provider}: {reason}")]
    LookupUnavailable { provider: String, reason: String },
}

impl From<FootprintError> for LookupError {
    fn from(err: FootprintError) -> Self {
        match err {
            FootprintError::Validation(msg) => Self::InvalidRequest(msg),
        }
    }
}

/// Failures reported by a lookup provider for the request as a whole.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider unreachable: {0}")]
    Unreachable(String),

    #[error("provider failed: {0}")]
    Failed(String),
}

/// A per-platform signal that could not be interpreted.
///
/// Never escapes the classifier; the platform degrades to `NotFound`.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("platform name is empty")]
    EmptyPlatformName,

    #[error("signal is not a JSON object")]
    NotAnObject,

    #[error("signal could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LookupError>;
