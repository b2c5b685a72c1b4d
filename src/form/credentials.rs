//! Credentials step - username, password, confirmation.

use secrecy::{ExposeSecret, SecretString};

use crate::fields::{
    ValidationError, validate_confirm_password, validate_password, validate_username,
};
use crate::strength::{Strength, calculate_password_strength};

/// Which input lost focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsField {
    Username,
    Password,
    Confirm,
}

/// State transitions, one per UI interaction.
#[derive(Debug)]
pub enum CredentialsEvent {
    UsernameChanged(String),
    PasswordChanged(SecretString),
    ConfirmChanged(SecretString),
    Blurred(CredentialsField),
    Submitted,
}

/// Transient state of the credentials step.
///
/// Holds secrets, so it carries no serde support; persist nothing from it.
#[derive(Debug)]
pub struct CredentialsForm {
    username: String,
    password: SecretString,
    confirm: SecretString,
    pub username_error: Option<ValidationError>,
    pub password_error: Option<ValidationError>,
    pub confirm_error: Option<ValidationError>,
    pub strength: Strength,
}

impl Default for CredentialsForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialsForm {
    pub fn new() -> Self {
        CredentialsForm {
            username: String::new(),
            password: SecretString::new(String::new().into()),
            confirm: SecretString::new(String::new().into()),
            username_error: None,
            password_error: None,
            confirm_error: None,
            strength: Strength::Weak,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Applies one event.
    ///
    /// Editing the password recomputes the strength meter and re-checks a
    /// non-empty confirmation; blur validates the blurred field only;
    /// submit validates everything.
    pub fn apply(&mut self, event: CredentialsEvent) {
        match event {
            CredentialsEvent::UsernameChanged(value) => {
                self.username = value;
            }
            CredentialsEvent::PasswordChanged(value) => {
                self.password = value;
                self.strength = calculate_password_strength(&self.password);
                if !self.confirm.expose_secret().is_empty() {
                    self.confirm_error =
                        validate_confirm_password(&self.confirm, &self.password).err();
                }
            }
            CredentialsEvent::ConfirmChanged(value) => {
                self.confirm = value;
            }
            CredentialsEvent::Blurred(CredentialsField::Username) => {
                self.username_error = validate_username(&self.username).err();
            }
            CredentialsEvent::Blurred(CredentialsField::Password) => {
                self.password_error = validate_password(&self.password).err();
            }
            CredentialsEvent::Blurred(CredentialsField::Confirm) => {
                self.confirm_error =
                    validate_confirm_password(&self.confirm, &self.password).err();
            }
            CredentialsEvent::Submitted => {
                self.username_error = validate_username(&self.username).err();
                self.password_error = validate_password(&self.password).err();
                self.confirm_error =
                    validate_confirm_password(&self.confirm, &self.password).err();

                #[cfg(feature = "tracing")]
                if !self.is_valid() {
                    tracing::debug!("credentials step rejected on submit");
                }
            }
        }
    }

    /// Submit button enablement: every input is non-empty.
    pub fn can_submit(&self) -> bool {
        !self.username.is_empty()
            && !self.password.expose_secret().is_empty()
            && !self.confirm.expose_secret().is_empty()
    }

    /// True when the most recent validation pass left every field clean.
    pub fn is_valid(&self) -> bool {
        self.username_error.is_none()
            && self.password_error.is_none()
            && self.confirm_error.is_none()
    }
}
