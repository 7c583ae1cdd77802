//! Base trait for actions dispatched to a store.

/// Marker trait for action objects.
///
/// Actions represent:
/// - User operations (add, delete, submit a wizard step)
/// - Boundary results (fetched data, loaded storage)
/// - Flag changes (loading, error)
///
/// Actions are processed by reducers to produce new states.
pub trait Action: Send + 'static {}
