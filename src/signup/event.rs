//! Events consumed by the sign-up reducer.

use crate::avatar::{Avatar, AvatarError};
use crate::mvi::Intent;

use super::action::SignUpAction;

/// Outcomes of the avatar fetch effect.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectEvent {
    AvatarFetchSucceeded(Avatar),
    AvatarFetchFailed(AvatarError),
}

impl Intent for EffectEvent {}

/// Everything the reducer handles: user actions and effect outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpEvent {
    Ui(SignUpAction),
    System(EffectEvent),
}

impl Intent for SignUpEvent {}

impl From<SignUpAction> for SignUpEvent {
    fn from(action: SignUpAction) -> Self {
        SignUpEvent::Ui(action)
    }
}

impl From<EffectEvent> for SignUpEvent {
    fn from(event: EffectEvent) -> Self {
        SignUpEvent::System(event)
    }
}
