//! Sign-up form feature module.
//!
//! A multi-field form whose submit fetches the avatar registered for the
//! entered email.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern with feedbacks:
//! - `state.rs` - Form state and the submit gate
//! - `action.rs` - User actions and the field table
//! - `event.rs` - Effect outcomes and the reducer's event union
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `feedback.rs` - The avatar fetch, declared as a feedback

mod action;
mod event;
mod feedback;
mod reducer;
mod state;

use std::sync::Arc;

use crate::avatar::AvatarLookup;
use crate::mvi::Store;

pub use action::{Field, SignUpAction};
pub use event::{EffectEvent, SignUpEvent};
pub use feedback::{feedbacks, when_signing_up};
pub use reducer::SignUpReducer;
pub use state::{SignUpState, Status};

pub type SignUpStore = Store<SignUpReducer>;

/// Start a sign-up store with an empty form.
///
/// Must be called from within a Tokio runtime.
pub fn sign_up_store(lookup: Arc<dyn AvatarLookup>) -> SignUpStore {
    tracing::debug!(lookup = lookup.name(), "creating sign-up store");
    Store::new(SignUpState::default(), feedbacks(lookup))
}
