//! Base trait for UI state in MVI architecture.

use std::fmt::Debug;

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
/// - Shareable (the store hands snapshots to other threads)
pub trait UiState: Clone + PartialEq + Default + Debug + Send + Sync + 'static {}
