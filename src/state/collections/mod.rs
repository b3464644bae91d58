//! Personal collections: wishlist, ready-to-adopt and owned.
//!
//! - `state.rs` - Collection types and the three ordered sequences
//! - `intent.rs` - Add, Remove, SetActive, Adopt
//! - `reducer.rs` - Synchronous, infallible transitions
//! - `membership.rs` - Id lookup and de-duplication shared by the reducer

mod intent;
pub mod membership;
mod reducer;
mod state;

pub use intent::CollectionsIntent;
pub use reducer::CollectionsReducer;
pub use state::{
    CollectionItem, CollectionType, CollectionsState, ParseCollectionError, UNKNOWN_GROUP,
};
