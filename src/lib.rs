//! # signup-loop
//!
//! A sign-up form state machine built as a unidirectional feedback loop:
//! state → feedbacks → events → reducer → state.
//!
//! - [`mvi`] holds the generic engine: the [`mvi::Reducer`] trait,
//!   predicate-gated [`mvi::Feedback`] effects, and the [`mvi::Store`]
//!   runtime that serializes every transition on one task.
//! - [`signup`] is the form itself: state, actions, reducer, and the
//!   "when signing up, fetch avatar" feedback.
//! - [`avatar`] is the injectable lookup capability with a live Gravatar
//!   client and deterministic doubles.
//!
//! ```ignore
//! use std::sync::Arc;
//! use signup_loop::avatar::MockAvatarLookup;
//! use signup_loop::signup::{sign_up_store, Field, SignUpAction};
//!
//! let store = sign_up_store(Arc::new(MockAvatarLookup::success()));
//! store.subscribe(|state| println!("{:?}", state));
//! store.dispatch(Field::Email.action("a@b.com"));
//! store.dispatch(Field::Password.action("x"));
//! store.dispatch(Field::Confirmation.action("x"));
//! store.dispatch(SignUpAction::SubmitTapped);
//! ```

pub mod avatar;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod signup;
