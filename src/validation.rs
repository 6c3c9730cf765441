// 🛡️ Field Validation - shared precondition checks
// Every setter in the account model funnels through these helpers

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Account numbers: 5 digits, hyphen, 1 alphanumeric check character
pub const ACCOUNT_NUMBER_PATTERN: &str = r"^\d{5}-\w$";

/// Maximum length of an account number ("12345-6")
pub const ACCOUNT_NUMBER_MAX_LEN: usize = 7;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Precondition failure raised by a constructor or setter.
///
/// These are not domain errors: they only say a value was rejected
/// before it could be stored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("{field} must have at most {max} characters, got {len}")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("account number '{value}' must be 5 digits, a hyphen and one digit or letter")]
    InvalidAccountNumber { value: String },
}

// ============================================================================
// CHECKS
// ============================================================================

/// Reject NaN and infinities.
pub fn require_finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

/// Finite and within `[min, max]`, both ends inclusive.
pub fn require_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, ValidationError> {
    let value = require_finite(field, value)?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(value)
}

/// Rates (interest, yield) live in `[0, 1]`.
pub fn require_rate(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    require_range(field, value, 0.0, 1.0)
}

fn account_number_regex() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(ACCOUNT_NUMBER_PATTERN).ok())
        .as_ref()
}

/// Validate an account number, returning an owned copy on success.
pub fn validate_account_number(value: &str) -> Result<String, ValidationError> {
    let len = value.chars().count();
    if len > ACCOUNT_NUMBER_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "account_number",
            max: ACCOUNT_NUMBER_MAX_LEN,
            len,
        });
    }

    match account_number_regex() {
        Some(re) if re.is_match(value) => Ok(value.to_string()),
        _ => Err(ValidationError::InvalidAccountNumber {
            value: value.to_string(),
        }),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_number_accepts_digit_and_letter_suffix() {
        assert_eq!(validate_account_number("12345-6").unwrap(), "12345-6");
        assert_eq!(validate_account_number("12345-X").unwrap(), "12345-X");
    }

    #[test]
    fn test_account_number_rejects_wrong_digit_count() {
        assert!(matches!(
            validate_account_number("1234-5"),
            Err(ValidationError::InvalidAccountNumber { .. })
        ));
        assert!(matches!(
            validate_account_number("123456-7"),
            Err(ValidationError::TooLong { len: 8, .. })
        ));
        assert!(validate_account_number("abcde-1").is_err());
        assert!(validate_account_number("").is_err());
        assert!(validate_account_number("12345-").is_err());
    }

    #[test]
    fn test_rate_bounds_are_inclusive() {
        assert_eq!(require_rate("interest_rate", 0.0), Ok(0.0));
        assert_eq!(require_rate("interest_rate", 1.0), Ok(1.0));
        assert!(require_rate("interest_rate", -0.01).is_err());
        assert!(require_rate("interest_rate", 1.01).is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert_eq!(
            require_finite("balance", f64::NAN),
            Err(ValidationError::NotFinite { field: "balance" })
        );
        assert!(require_finite("balance", f64::INFINITY).is_err());
        assert!(require_range("overdraft_limit", f64::NEG_INFINITY, 0.0, 1000.0).is_err());
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = require_range("overdraft_limit", 1000.01, 0.0, 1000.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "overdraft_limit must be between 0 and 1000, got 1000.01"
        );
    }
}
