//! # Error Types
//!
//! Domain-specific error types for taborder-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  taborder-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  taborder-remote errors (separate crate)                               │
//! │  └── RemoteError      - Fetch / config failures                        │
//! │                                                                         │
//! │  kiosk errors (in app)                                                 │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Overlay transitions never produce errors: an open request that the state
//! machine refuses is reported as [`crate::Transition::Ignored`], not as an
//! `Err`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Language code has no locale table.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Notification id could not be parsed.
    #[error("Invalid notification id: {0}")]
    InvalidNotificationId(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}
