//! Onboarding field validation library
//!
//! Pure, synchronous validators for a social sign-up flow (username,
//! password, confirmation, email, date of birth, gender, verification
//! code, social profile links), a coarse password-strength score for UI
//! feedback, and reducer-style form state for the sign-up steps.
//!
//! The strength score is advisory; each field also has a hard pass/fail
//! gate that must hold before a form submits. Every validator is a total
//! function over its input and returns a single structured reason on
//! failure.
//!
//! # Features
//!
//! - `async` (default): Enables debounced strength evaluation with
//!   cancellation support
//! - `serde`: Enables serialization of public enums and profile form state
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use signup_validation::{Strength, calculate_password_strength, validate_password};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd".to_string().into());
//!
//! assert_eq!(calculate_password_strength(&password), Strength::Strong);
//! assert!(validate_password(&password).is_ok());
//! ```

// Internal modules
mod fields;
mod form;
mod mask;
mod strength;

// Public API
pub use fields::{
    FieldResult, Gender, OTP_LENGTH, Platform, ValidationError, validate_confirm_password,
    validate_date_of_birth, validate_email, validate_gender, validate_login_password,
    validate_name, validate_otp_code, validate_password, validate_social_url, validate_username,
};
pub use form::{CredentialsEvent, CredentialsField, CredentialsForm, ProfileEvent, ProfileForm};
pub use mask::format_date_input;
pub use strength::{
    Criteria, SPECIAL_CHARS, Strength, StrengthEvaluation, calculate_password_strength,
    evaluate_password_strength,
};

#[cfg(feature = "async")]
pub use strength::evaluate_password_strength_tx;
