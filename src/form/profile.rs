//! Profile step - names, date of birth, gender, interest tags.

use chrono::NaiveDate;

use crate::fields::{
    Gender, ValidationError, validate_date_of_birth, validate_gender, validate_name,
};
use crate::mask::format_date_input;

/// State transitions for the profile step.
#[derive(Debug)]
pub enum ProfileEvent {
    FirstNameChanged(String),
    LastNameChanged(String),
    /// Raw keystrokes for the date field; the mask is applied on the way in.
    DateInput(String),
    GenderSelected(Gender),
    /// Raw keystrokes for the interest field; a buffered `#tag` commits
    /// when a trailing space arrives.
    InterestInput(String),
    InterestRemoved(String),
    /// Validates the step against the caller's current date.
    Submitted { today: NaiveDate },
}

/// Transient state of the profile step. Serializable so a half-completed
/// step can be restored.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    /// Always mask-formatted; set through [`ProfileEvent::DateInput`].
    pub date_of_birth: String,
    pub gender: Option<Gender>,
    pub interests: Vec<String>,
    pub pending_tag: String,
    pub first_name_error: Option<ValidationError>,
    pub last_name_error: Option<ValidationError>,
    pub date_error: Option<ValidationError>,
    pub gender_error: Option<ValidationError>,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event.
    pub fn apply(&mut self, event: ProfileEvent) {
        match event {
            ProfileEvent::FirstNameChanged(value) => {
                self.first_name = value;
            }
            ProfileEvent::LastNameChanged(value) => {
                self.last_name = value;
            }
            ProfileEvent::DateInput(raw) => {
                self.date_of_birth = format_date_input(&raw);
            }
            ProfileEvent::GenderSelected(gender) => {
                self.gender = Some(gender);
            }
            ProfileEvent::InterestInput(text) => {
                self.buffer_interest(text);
            }
            ProfileEvent::InterestRemoved(tag) => {
                self.interests.retain(|t| t != &tag);
            }
            ProfileEvent::Submitted { today } => {
                self.first_name_error = validate_name(&self.first_name).err();
                self.last_name_error = validate_name(&self.last_name).err();
                self.date_error = validate_date_of_birth(&self.date_of_birth, today).err();
                self.gender_error = validate_gender(self.gender).err();

                #[cfg(feature = "tracing")]
                if !self.is_valid() {
                    tracing::debug!("profile step rejected on submit");
                }
            }
        }
    }

    // The committed tag is the previously buffered text, not the incoming
    // keystroke batch.
    fn buffer_interest(&mut self, text: String) {
        if text.ends_with(' ') && self.pending_tag.starts_with('#') {
            let tag = self.pending_tag.trim().to_string();
            if tag.len() > 1 && !self.interests.contains(&tag) {
                self.interests.push(tag);
            }
            self.pending_tag.clear();
        } else {
            self.pending_tag = text;
        }
    }

    /// Submit button enablement: every required input has a value.
    pub fn can_submit(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.date_of_birth.is_empty()
            && self.gender.is_some()
    }

    /// True when the most recent validation pass left every field clean.
    pub fn is_valid(&self) -> bool {
        self.first_name_error.is_none()
            && self.last_name_error.is_none()
            && self.date_error.is_none()
            && self.gender_error.is_none()
    }
}
