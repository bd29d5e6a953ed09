//! Actions the presentation layer dispatches, and the field table that
//! maps text-field edits onto them.

use std::fmt;

use crate::mvi::Intent;

use super::state::{redacted, SignUpState};

/// User intents for the sign-up form.
#[derive(Clone, PartialEq, Eq)]
pub enum SignUpAction {
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmationChanged(String),
    SubmitTapped,
}

impl Intent for SignUpAction {}

impl fmt::Debug for SignUpAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignUpAction::EmailChanged(email) => f.debug_tuple("EmailChanged").field(email).finish(),
            SignUpAction::PasswordChanged(password) => f
                .debug_tuple("PasswordChanged")
                .field(&redacted(password))
                .finish(),
            SignUpAction::ConfirmationChanged(confirmation) => f
                .debug_tuple("ConfirmationChanged")
                .field(&redacted(confirmation))
                .finish(),
            SignUpAction::SubmitTapped => f.write_str("SubmitTapped"),
        }
    }
}

/// Editable text fields of the form.
///
/// Text inputs bind through this table: read with [`Field::value`],
/// write by dispatching [`Field::action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
    Confirmation,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Email, Field::Password, Field::Confirmation];

    /// The action that sets this field to `value`.
    pub fn action(self, value: impl Into<String>) -> SignUpAction {
        let value = value.into();
        match self {
            Field::Email => SignUpAction::EmailChanged(value),
            Field::Password => SignUpAction::PasswordChanged(value),
            Field::Confirmation => SignUpAction::ConfirmationChanged(value),
        }
    }

    /// Current value of this field.
    pub fn value(self, state: &SignUpState) -> &str {
        match self {
            Field::Email => &state.email,
            Field::Password => &state.password,
            Field::Confirmation => &state.password_confirmation,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Password => "Password",
            Field::Confirmation => "Confirm password",
        }
    }
}
