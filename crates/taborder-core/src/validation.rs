//! # Validation Module
//!
//! Input validation for values that arrive from outside: the company id from
//! configuration and notification text from collaborators.

use crate::error::ValidationError;
use crate::{MAX_COMPANY_ID_LEN, MAX_NOTIFICATION_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a company identifier.
///
/// ## Rules
/// - Must not be empty
/// - At most 100 characters
/// - Letters, numbers, hyphens, underscores and dots only
///
/// ## Example
/// ```rust
/// use taborder_core::validation::validate_company_id;
///
/// assert!(validate_company_id("demo-bistro").is_ok());
/// assert!(validate_company_id("").is_err());
/// assert!(validate_company_id("a&b").is_err());
/// ```
pub fn validate_company_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "company".to_string(),
        });
    }

    if id.len() > MAX_COMPANY_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "company".to_string(),
            max: MAX_COMPANY_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(ValidationError::InvalidFormat {
            field: "company".to_string(),
            reason: "must contain only letters, numbers, '-', '_' and '.'".to_string(),
        });
    }

    Ok(())
}

/// Validates notification text and returns it trimmed.
///
/// Empty text is allowed: the channel starts out with an empty message.
pub fn validate_notification_message(message: &str) -> ValidationResult<String> {
    let message = message.trim();

    if message.chars().count() > MAX_NOTIFICATION_LEN {
        return Err(ValidationError::TooLong {
            field: "message".to_string(),
            max: MAX_NOTIFICATION_LEN,
        });
    }

    Ok(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_company_id() {
        assert!(validate_company_id("bistro_01").is_ok());
        assert!(validate_company_id("tab.order").is_ok());
        assert!(validate_company_id("").is_err());
        assert!(validate_company_id("bad company").is_err());
        assert!(validate_company_id(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_notification_message() {
        assert_eq!(
            validate_notification_message("  Order sent  ").unwrap(),
            "Order sent"
        );
        assert!(validate_notification_message(&"x".repeat(501)).is_err());
    }
}
