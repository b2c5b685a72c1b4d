//! One-time verification code format check.

use super::{FieldResult, ValidationError};

/// Number of digits in a verification code.
pub const OTP_LENGTH: usize = 6;

/// Accepts exactly `OTP_LENGTH` ASCII digits. Whether the code is the one
/// that was issued is the backend's call, not this crate's.
pub fn validate_otp_code(code: &str) -> FieldResult {
    if code.is_empty() {
        return Err(ValidationError::Required);
    }
    if code.len() != OTP_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_code_is_required() {
        assert_eq!(validate_otp_code(""), Err(ValidationError::Required));
    }

    #[test]
    fn test_incomplete_code_rejected() {
        assert_eq!(validate_otp_code("12345"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_non_digit_rejected() {
        assert_eq!(validate_otp_code("12a456"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_overlong_code_rejected() {
        assert_eq!(validate_otp_code("1234567"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_valid_code() {
        assert_eq!(validate_otp_code("123456"), Ok(()));
    }
}
