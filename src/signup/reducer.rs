//! Reducer for the sign-up form.

use crate::mvi::Reducer;

use super::action::SignUpAction;
use super::event::{EffectEvent, SignUpEvent};
use super::state::{SignUpState, Status};

/// Reducer for sign-up state transitions.
///
/// Pure function: the avatar fetch is started by the store's feedback,
/// never from here. Submit is not re-validated; gating on
/// `is_submit_enabled` is the caller's job.
pub struct SignUpReducer;

impl Reducer for SignUpReducer {
    type State = SignUpState;
    type Action = SignUpAction;
    type Event = SignUpEvent;

    fn reduce(state: Self::State, event: Self::Event) -> Self::State {
        match event {
            SignUpEvent::Ui(action) => match action {
                SignUpAction::EmailChanged(email) => SignUpState {
                    email,
                    sign_up_error_message: None,
                    avatar: None,
                    ..state
                },
                SignUpAction::PasswordChanged(password) => SignUpState { password, ..state },
                SignUpAction::ConfirmationChanged(password_confirmation) => SignUpState {
                    password_confirmation,
                    ..state
                },
                SignUpAction::SubmitTapped => SignUpState {
                    status: Status::SigningUp,
                    sign_up_error_message: None,
                    ..state
                },
            },

            SignUpEvent::System(effect) => match effect {
                EffectEvent::AvatarFetchSucceeded(avatar) => SignUpState {
                    status: Status::Editing,
                    avatar: Some(avatar),
                    ..state
                },
                EffectEvent::AvatarFetchFailed(error) => SignUpState {
                    status: Status::Editing,
                    sign_up_error_message: Some(error.to_string()),
                    ..state
                },
            },
        }
    }
}
