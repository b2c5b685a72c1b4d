//! Reducer-style form state for the sign-up screens.
//!
//! The validators stay free functions; these structs own the transient
//! field values and per-field error slots, and re-run the validators on
//! events the way the screens do.

mod credentials;
mod profile;

pub use credentials::{CredentialsEvent, CredentialsField, CredentialsForm};
pub use profile::{ProfileEvent, ProfileForm};
