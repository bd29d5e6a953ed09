//! State for the sign-up form.

use std::fmt;

use crate::avatar::Avatar;
use crate::mvi::UiState;

/// Lifecycle phase of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// The user is filling in fields.
    #[default]
    Editing,

    /// A submit is in progress; the avatar fetch is running.
    SigningUp,
}

/// Sign-up form state.
///
/// Only the reducer produces new values; the store hands out clones.
#[derive(Clone, PartialEq, Default)]
pub struct SignUpState {
    pub status: Status,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    /// Cleared when the email changes or a submit starts.
    pub sign_up_error_message: Option<String>,
    /// Cleared when the email changes.
    pub avatar: Option<Avatar>,
}

impl UiState for SignUpState {}

impl SignUpState {
    /// Whether the submit button should be enabled.
    pub fn is_submit_enabled(&self) -> bool {
        !self.email.is_empty()
            && !self.password.is_empty()
            && self.password == self.password_confirmation
            && self.status == Status::Editing
    }

    pub fn is_signing_up(&self) -> bool {
        self.status == Status::SigningUp
    }
}

/// Stand-in for a secret in debug output.
pub(crate) fn redacted(secret: &str) -> String {
    format!("<{} chars>", secret.chars().count())
}

impl fmt::Debug for SignUpState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpState")
            .field("status", &self.status)
            .field("email", &self.email)
            .field("password", &redacted(&self.password))
            .field(
                "password_confirmation",
                &redacted(&self.password_confirmation),
            )
            .field("sign_up_error_message", &self.sign_up_error_message)
            .field("avatar", &self.avatar)
            .finish()
    }
}
