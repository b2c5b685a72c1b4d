//! Field validators for the onboarding flow.
//!
//! Each validator classifies one user-entered field: rules run in a fixed
//! order and the first violation wins.

mod date_of_birth;
mod email;
mod gender;
mod name;
mod otp;
mod password;
mod social;
mod username;

pub use date_of_birth::validate_date_of_birth;
pub use email::validate_email;
pub use gender::{Gender, validate_gender};
pub use name::validate_name;
pub use otp::{OTP_LENGTH, validate_otp_code};
pub use password::{validate_confirm_password, validate_login_password, validate_password};
pub use social::{Platform, validate_social_url};
pub use username::validate_username;

use thiserror::Error;

/// Why a field failed validation.
///
/// These are expected-input classifications, not faults; validators never
/// panic on well-typed input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValidationError {
    #[error("field is required")]
    Required,
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("use lowercase letters, numbers, or _")]
    InvalidCharacters,
    #[error("must include uppercase, lowercase, number, and special character")]
    MissingComplexity,
    #[error("passwords do not match")]
    Mismatch,
    #[error("does not match the expected format")]
    InvalidFormat,
    #[error("date cannot be in the future")]
    FutureDate,
    #[error("must be at least 13 years old")]
    Underage,
}

/// Result type for field validators.
/// - `Ok(())` - field passed
/// - `Err(reason)` - field failed with exactly one reason
pub type FieldResult = Result<(), ValidationError>;
