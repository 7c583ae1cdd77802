//! Base trait for slice state held by a store.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create snapshots)
/// - Self-contained (all data a screen needs to render)
/// - Comparable (PartialEq for detecting changes)
/// - Defaultable (the empty initial state)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
