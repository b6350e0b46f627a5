//! Domain error types
//!
//! This module defines the error hierarchy for the provider. Errors fall into
//! three families: local validation failures (no API call is made), transport
//! or API failures reported by the remote platform, and JSON failures on
//! free-form JSON attributes. All errors are domain-specific and don't expose
//! third-party types.

use thiserror::Error;

/// Main provider error type
///
/// This is the primary error type used throughout the crate. Every variant
/// converts into a [`Diagnostic`](super::diagnostics::Diagnostic) at the
/// command boundary.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Errors raised by the Saviynt API or the transport underneath it
    #[error("Saviynt API error: {0}")]
    Api(#[from] SaviyntError),

    /// Local validation failures (schema violations, immutable attributes)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication errors during provider configuration
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Local state file errors
    #[error("State error: {0}")]
    State(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl ProviderError {
    /// Returns true when the error was raised before any remote call was made
    pub fn is_local(&self) -> bool {
        !matches!(
            self,
            ProviderError::Api(_) | ProviderError::Authentication(_)
        )
    }
}

/// Saviynt-specific errors
///
/// Errors that occur when talking to the Saviynt REST API. These errors don't
/// expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum SaviyntError {
    /// Failed to reach the server
    #[error("Failed to connect to Saviynt server: {0}")]
    ConnectionFailed(String),

    /// Login was rejected or returned no token
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Response body could not be decoded
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// The API answered with a non-zero error code
    #[error("API returned error code {code}: {message}")]
    ApiError { code: String, message: String },

    /// Requested object does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

impl SaviyntError {
    /// Build the error for an HTTP status outside 2xx
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status >= 500 {
            SaviyntError::ServerError { status, message }
        } else {
            SaviyntError::ClientError { status, message }
        }
    }

    /// Build the error for a reqwest transport failure
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            SaviyntError::Timeout(err.to_string())
        } else {
            SaviyntError::ConnectionFailed(err.to_string())
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ProviderError {
    fn from(err: std::io::Error) -> Self {
        ProviderError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ProviderError {
    fn from(err: toml::de::Error) -> Self {
        ProviderError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_saviynt_error_conversion() {
        let api_err = SaviyntError::ConnectionFailed("Network error".to_string());
        let err: ProviderError = api_err.into();
        assert!(matches!(err, ProviderError::Api(_)));
        assert!(!err.is_local());
    }

    #[test]
    fn test_validation_error_is_local() {
        let err = ProviderError::Validation("Connection name cannot be updated".to_string());
        assert!(err.is_local());
        assert!(err.to_string().contains("Connection name cannot be updated"));
    }

    #[test]
    fn test_from_status_splits_client_and_server() {
        assert!(matches!(
            SaviyntError::from_status(503, "unavailable"),
            SaviyntError::ServerError { status: 503, .. }
        ));
        assert!(matches!(
            SaviyntError::from_status(401, "unauthorized"),
            SaviyntError::ClientError { status: 401, .. }
        ));
    }

    #[test]
    fn test_api_error_display() {
        let err = SaviyntError::ApiError {
            code: "1".to_string(),
            message: "Connection already exists".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API returned error code 1: Connection already exists"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ProviderError = io_err.into();
        assert!(matches!(err, ProviderError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ProviderError = json_err.into();
        assert!(matches!(err, ProviderError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ProviderError = toml_err.into();
        assert!(matches!(err, ProviderError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
