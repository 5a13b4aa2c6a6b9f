//! Error types for bitmind-actions

use thiserror::Error;

/// Errors raised while talking to a remote analysis API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{service} API request failed: {reason}")]
    Status {
        service: &'static str,
        status: u16,
        reason: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse API response: {0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status code, when the remote answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors surfaced by an action invocation
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Failed to detect image: {0}")]
    ImageDetection(#[source] ApiError),

    #[error("Failed to analyze URL: {0}")]
    UrlAnalysis(#[source] ApiError),

    #[error("No URL found in message")]
    NoLink,

    #[error("API token not configured")]
    MissingCredential,

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Result type alias for action operations
pub type Result<T> = std::result::Result<T, ActionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            service: "BitMind",
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "BitMind API request failed: Internal Server Error"
        );
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_action_error_wraps_api_error() {
        let err = ActionError::UrlAnalysis(ApiError::Status {
            service: "Trinity Matrix",
            status: 503,
            reason: "Service Unavailable".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Failed to analyze URL: Trinity Matrix API request failed: Service Unavailable"
        );
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = ApiError::Network("connection refused".to_string());
        assert!(err.status().is_none());
    }
}
