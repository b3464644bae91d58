//! Marker trait for state snapshots.

/// State handed to views.
///
/// Snapshots are cloned out of the store, compared to detect changes and
/// start from `Default` when the process starts (nothing is persisted).
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}
