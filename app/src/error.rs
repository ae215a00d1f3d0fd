//! Error types for lookup commands.

use footprint_lookup::LookupError;
use serde::Serialize;

/// Serializable error returned by commands.
#[derive(Debug, Serialize)]
pub struct CommandError {
    /// Error code for client handling (e.g., "LOOKUP_UNAVAILABLE")
    pub code: String,
    /// User-friendly error message
    pub message: String,
    /// Optional debugging context
    pub details: Option<serde_json::Value>,
}

impl CommandError {
    /// Create a new command error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create a command error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}

/// Convert LookupError to CommandError for serialization.
impl From<LookupError> for CommandError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::InvalidRequest(msg) => {
                Self::new("INVALID_REQUEST", format!("Invalid request: {msg}"))
            }
            LookupError::LookupUnavailable { provider, reason } => Self::with_details(
                "LOOKUP_UNAVAILABLE",
                "Lookup service is unavailable, try again later",
                serde_json::json!({ "provider": provider, "reason": reason }),
            ),
        }
    }
}

/// A request body that is not valid JSON is an invalid request.
impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::new("INVALID_REQUEST", format!("Malformed request: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_new() {
        let err = CommandError::new("TEST_CODE", "Test message");
        assert_eq!(err.code, "TEST_CODE");
        assert_eq!(err.message, "Test message");
        assert!(err.details.is_none());
        assert_eq!(err.to_string(), "TEST_CODE: Test message");
    }

    #[test]
    fn test_invalid_request_conversion() {
        let err: CommandError = LookupError::InvalidRequest("username is empty".into()).into();
        assert_eq!(err.code, "INVALID_REQUEST");
        assert!(err.message.contains("username is empty"));
        assert!(err.details.is_none());
    }

    #[test]
    fn test_lookup_unavailable_conversion() {
        let err: CommandError = LookupError::LookupUnavailable {
            provider: "static".into(),
            reason: "timed out after 15s".into(),
        }
        .into();
        assert_eq!(err.code, "LOOKUP_UNAVAILABLE");
        let details = err.details.expect("details");
        assert_eq!(details["provider"], "static");
        assert_eq!(details["reason"], "timed out after 15s");
    }

    #[test]
    fn test_serialized_shape() {
        let err = CommandError::new("INVALID_REQUEST", "bad");
        let json = serde_json::to_value(&err).expect("serialize error");
        assert_eq!(
            json,
            serde_json::json!({ "code": "INVALID_REQUEST", "message": "bad", "details": null })
        );
    }
}
