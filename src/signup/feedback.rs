//! Side effects of the sign-up form.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use crate::avatar::{AvatarError, AvatarLookup};
use crate::mvi::Feedback;

use super::event::{EffectEvent, SignUpEvent};
use super::state::SignUpState;

/// When signing up, fetch the avatar for the entered email.
///
/// Runs once per entry into `SigningUp`. Every failure, including a
/// panicking lookup, comes back as `AvatarFetchFailed`.
pub fn when_signing_up(lookup: Arc<dyn AvatarLookup>) -> Feedback<SignUpState, EffectEvent> {
    Feedback::future(
        "when_signing_up",
        SignUpState::is_signing_up,
        move |state: SignUpState| {
            let lookup = Arc::clone(&lookup);
            async move {
                let outcome = AssertUnwindSafe(lookup.lookup_avatar(&state.email))
                    .catch_unwind()
                    .await
                    .unwrap_or_else(|_| {
                        tracing::error!(lookup = lookup.name(), "avatar lookup panicked");
                        Err(AvatarError::Unknown)
                    });

                match outcome {
                    Ok(avatar) => {
                        tracing::debug!(lookup = lookup.name(), ?avatar, "avatar fetched");
                        EffectEvent::AvatarFetchSucceeded(avatar)
                    }
                    Err(error) => {
                        tracing::info!(lookup = lookup.name(), %error, "avatar fetch failed");
                        EffectEvent::AvatarFetchFailed(error)
                    }
                }
            }
        },
    )
}

/// All feedbacks of the sign-up store.
pub fn feedbacks(lookup: Arc<dyn AvatarLookup>) -> Vec<Feedback<SignUpState, SignUpEvent>> {
    vec![when_signing_up(lookup).map_event(SignUpEvent::System)]
}
