//! Password gates - sign-up, login, and confirmation.

use secrecy::{ExposeSecret, SecretString};

use super::{FieldResult, ValidationError};
use crate::strength::is_special;

const MIN_SIGNUP_LENGTH: usize = 8;
const MIN_LOGIN_LENGTH: usize = 6;

/// Hard gate for new passwords.
///
/// All four character classes are mandatory regardless of overall length,
/// which makes this stricter than the advisory strength score: a candidate
/// can score `Good` and still fail here.
pub fn validate_password(password: &SecretString) -> FieldResult {
    let pwd = password.expose_secret();

    if pwd.is_empty() {
        return Err(ValidationError::Required);
    }
    if pwd.chars().count() < MIN_SIGNUP_LENGTH {
        return Err(ValidationError::TooShort {
            min: MIN_SIGNUP_LENGTH,
        });
    }

    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(is_special);

    if !has_upper || !has_lower || !has_digit || !has_special {
        return Err(ValidationError::MissingComplexity);
    }
    Ok(())
}

/// Login gate: existing passwords only need a minimum length.
pub fn validate_login_password(password: &SecretString) -> FieldResult {
    let pwd = password.expose_secret();

    if pwd.is_empty() {
        return Err(ValidationError::Required);
    }
    if pwd.chars().count() < MIN_LOGIN_LENGTH {
        return Err(ValidationError::TooShort {
            min: MIN_LOGIN_LENGTH,
        });
    }
    Ok(())
}

/// Exact, case-sensitive match against the original entry.
///
/// Re-run whenever either side changes; a stale pass is meaningless.
pub fn validate_confirm_password(confirm: &SecretString, original: &SecretString) -> FieldResult {
    if confirm.expose_secret().is_empty() {
        return Err(ValidationError::Required);
    }
    if confirm.expose_secret() != original.expose_secret() {
        return Err(ValidationError::Mismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_empty_password_is_required() {
        assert_eq!(validate_password(&secret("")), Err(ValidationError::Required));
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(
            validate_password(&secret("Abc1!")),
            Err(ValidationError::TooShort { min: 8 })
        );
    }

    #[test]
    fn test_password_missing_complexity_despite_length() {
        assert_eq!(
            validate_password(&secret("alllowercase1!")),
            Err(ValidationError::MissingComplexity)
        );
    }

    #[test]
    fn test_password_missing_special() {
        assert_eq!(
            validate_password(&secret("Abcdefg1")),
            Err(ValidationError::MissingComplexity)
        );
    }

    #[test]
    fn test_valid_password() {
        assert_eq!(validate_password(&secret("Abcdef1!")), Ok(()));
    }

    #[test]
    fn test_login_password_shorter_gate() {
        assert_eq!(
            validate_login_password(&secret("12345")),
            Err(ValidationError::TooShort { min: 6 })
        );
        assert_eq!(validate_login_password(&secret("123456")), Ok(()));
    }

    #[test]
    fn test_login_password_required() {
        assert_eq!(
            validate_login_password(&secret("")),
            Err(ValidationError::Required)
        );
    }

    #[test]
    fn test_confirm_empty_is_required() {
        assert_eq!(
            validate_confirm_password(&secret(""), &secret("x")),
            Err(ValidationError::Required)
        );
    }

    #[test]
    fn test_confirm_mismatch() {
        assert_eq!(
            validate_confirm_password(&secret("x"), &secret("y")),
            Err(ValidationError::Mismatch)
        );
    }

    #[test]
    fn test_confirm_is_case_sensitive() {
        assert_eq!(
            validate_confirm_password(&secret("Secret1!"), &secret("secret1!")),
            Err(ValidationError::Mismatch)
        );
    }

    #[test]
    fn test_confirm_match() {
        assert_eq!(
            validate_confirm_password(&secret("x"), &secret("x")),
            Ok(())
        );
    }
}
