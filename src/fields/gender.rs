//! Gender selection.

use super::{FieldResult, ValidationError};

/// Profile gender choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// A selection must exist before the profile step submits.
pub fn validate_gender(gender: Option<Gender>) -> FieldResult {
    match gender {
        Some(_) => Ok(()),
        None => Err(ValidationError::Required),
    }
}
