//! Model-View-Intent (MVI) engine with declarative feedback effects.
//!
//! This module provides the generic pieces of a unidirectional
//! "feedback loop": a pure reducer, predicate-gated asynchronous
//! effects, and the [`Store`] runtime that serializes them.
//!
//! # Architecture
//!
//! ```text
//!  dispatch(Action) ──┐
//!                     ▼
//!               event channel ◄──────────────┐
//!                     │                      │
//!                     ▼                      │
//!   State ──► Reducer::reduce ──► State'     │
//!                                   │        │
//!                  ┌────────────────┤        │
//!                  ▼                ▼        │
//!              observers     Feedback predicates
//!                                   │        │
//!                                   ▼        │
//!                            effect stream ──┘
//! ```
//!
//! - **State**: Immutable value replaced on every event
//! - **Intent**: User actions or effect outcomes
//! - **Reducer**: Pure function that transforms state based on events
//! - **Feedback**: Declared side effect, started when its predicate begins to hold
//! - **Store**: Owns the state and runs the loop on a single Tokio task

mod feedback;
mod intent;
mod reducer;
mod shutdown;
mod state;
mod store;

pub use feedback::{EffectStream, Feedback};
pub use intent::Intent;
pub use reducer::Reducer;
pub use shutdown::ShutdownSignal;
pub use state::UiState;
pub use store::{Store, SubscriptionId};
