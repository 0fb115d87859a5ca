//! # Remote Error Types
//!
//! Error types for remote fetches and configuration loading.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Remote Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Payload             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  RequestFailed  │  │  DeserializationFailed  │ │
//! │  │  InvalidUrl     │  │  Status         │  │                         │ │
//! │  │ ConfigLoadFailed│  │  Timeout        │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Transport and payload errors never reach the user: the fetcher logs them
//! and the session falls back to default data.

use thiserror::Error;

/// Result type alias for remote operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Remote error type covering configuration and fetch failures.
#[derive(Debug, Error)]
pub enum RemoteError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid API base URL.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Request could not be sent or the connection broke.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Request timed out.
    #[error("Request timed out: {0}")]
    Timeout(String),

    // =========================================================================
    // Payload Errors
    // =========================================================================
    /// Response body did not match the expected shape.
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RemoteError::Timeout(err.to_string())
        } else if err.is_decode() {
            RemoteError::DeserializationFailed(err.to_string())
        } else if let Some(status) = err.status() {
            RemoteError::Status {
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
                status: status.as_u16(),
            }
        } else {
            RemoteError::RequestFailed(err.to_string())
        }
    }
}

impl From<url::ParseError> for RemoteError {
    fn from(err: url::ParseError) -> Self {
        RemoteError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        RemoteError::DeserializationFailed(err.to_string())
    }
}

impl From<toml::de::Error> for RemoteError {
    fn from(err: toml::de::Error) -> Self {
        RemoteError::ConfigLoadFailed(err.to_string())
    }
}

impl From<std::io::Error> for RemoteError {
    fn from(err: std::io::Error) -> Self {
        RemoteError::ConfigLoadFailed(err.to_string())
    }
}

impl From<taborder_core::CoreError> for RemoteError {
    fn from(err: taborder_core::CoreError) -> Self {
        RemoteError::InvalidConfig(err.to_string())
    }
}

impl From<taborder_core::ValidationError> for RemoteError {
    fn from(err: taborder_core::ValidationError) -> Self {
        RemoteError::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RemoteError::Status {
            url: "https://api.example/toggles".into(),
            status: 503,
        };
        assert_eq!(err.to_string(), "https://api.example/toggles returned HTTP 503");
    }

    #[test]
    fn test_url_error_conversion() {
        let err: RemoteError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, RemoteError::InvalidUrl(_)));
    }
}
