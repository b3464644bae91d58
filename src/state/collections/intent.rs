//! Intents for the collections state machine.

use crate::state::mvi::Intent;

use super::state::{CollectionItem, CollectionType};

/// Synchronous collection mutations. None of them can fail.
#[derive(Debug, Clone)]
pub enum CollectionsIntent {
    /// Insert unless the id is already present.
    Add {
        collection: CollectionType,
        item: CollectionItem,
    },

    /// Remove by id; absent ids are ignored.
    Remove {
        collection: CollectionType,
        item_id: u32,
    },

    /// Select the collection being viewed (`None` = full catalog).
    SetActive(Option<CollectionType>),

    /// Move everything ready to adopt into owned.
    Adopt,
}

impl Intent for CollectionsIntent {}
