//! # API Error Type
//!
//! Unified error type for kiosk commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  set_language("xx")                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CoreError::UnsupportedLanguage ───────────┐                            │
//! │  ValidationError::TooLong ─────────────────┼──► ApiError { code, msg }  │
//! │  unknown category button ──────────────────┘         │                  │
//! │                                                      ▼                  │
//! │                                     { "code": "UNSUPPORTED_LANGUAGE",   │
//! │                                       "message": "..." }                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Remote fetch failures never reach commands: the session degrades to
//! defaults instead. Configuration errors stop the binary before any command
//! runs.

use serde::Serialize;
use taborder_core::{CoreError, ValidationError};

/// API error returned from commands.
///
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "message exceeds maximum length of 500"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Language code outside the supported set
    UnsupportedLanguage,

    /// Clicked something that is not on the bar
    NotFound,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnsupportedLanguage(code) => ApiError::new(
                ErrorCode::UnsupportedLanguage,
                format!("Unsupported language: {}", code),
            ),
            CoreError::InvalidNotificationId(id) => {
                ApiError::validation(format!("Invalid notification id: {}", id))
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
