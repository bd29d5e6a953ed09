//! Base trait for intents (user actions and effect outcomes).

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (field edits, button taps)
/// - Effect outcomes (lookup succeeded or failed)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Debug + Send + 'static {}
