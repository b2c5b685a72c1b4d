//! Username validation - lowercase handles only.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{FieldResult, ValidationError};

const MIN_LENGTH: usize = 4;

/// Checks a candidate handle.
///
/// Uppercase letters are rejected outright; handles are lowercase-only.
pub fn validate_username(username: &str) -> FieldResult {
    static HANDLE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9_]+$").unwrap());

    if username.is_empty() {
        return Err(ValidationError::Required);
    }
    if username.chars().count() < MIN_LENGTH {
        return Err(ValidationError::TooShort { min: MIN_LENGTH });
    }
    if !HANDLE_REGEX.is_match(username) {
        return Err(ValidationError::InvalidCharacters);
    }
    Ok(())
}
