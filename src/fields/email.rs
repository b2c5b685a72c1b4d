//! Email format check for the login and reset-password screens.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{FieldResult, ValidationError};

/// Checks the address has a local part, an `@`, and a dotted domain.
pub fn validate_email(email: &str) -> FieldResult {
    static EMAIL_REGEX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

    if email.is_empty() {
        return Err(ValidationError::Required);
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_email_is_required() {
        assert_eq!(validate_email(""), Err(ValidationError::Required));
    }

    #[test]
    fn test_missing_at_sign() {
        assert_eq!(
            validate_email("jane.example.com"),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_missing_domain_dot() {
        assert_eq!(validate_email("jane@example"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_whitespace_rejected() {
        assert_eq!(
            validate_email("jane doe@example.com"),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_valid_email() {
        assert_eq!(validate_email("jane@example.com"), Ok(()));
        assert_eq!(validate_email("a@b.c"), Ok(()));
    }
}
