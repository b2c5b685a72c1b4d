//! Display-name fields only need to be present.

use super::{FieldResult, ValidationError};

pub fn validate_name(name: &str) -> FieldResult {
    if name.is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}
