//! Marker trait for intents.

/// A request to change state.
///
/// Synchronous intents (add, remove, adopt, select) carry their payload
/// directly. Asynchronous ones (fetch, search) are dispatched once per
/// lifecycle phase.
pub trait Intent: Send + 'static {}
