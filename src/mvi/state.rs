//! Base trait for view state in MVI architecture.

/// Marker trait for view state snapshots.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for suppressing duplicate emissions)
pub trait ViewState: Clone + PartialEq + Default + Send + Sync + 'static {}
