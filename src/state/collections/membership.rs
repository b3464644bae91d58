//! Membership and de-duplication over a single collection.
//!
//! Collections grow only through user clicks, so a linear scan is fine.

use super::state::CollectionItem;

pub fn contains(items: &[CollectionItem], id: u32) -> bool {
    items.iter().any(|item| item.id == id)
}

/// Append `item` unless an element with the same id exists.
/// Returns whether it was appended.
pub fn push_unique(items: &mut Vec<CollectionItem>, item: CollectionItem) -> bool {
    if contains(items, item.id) {
        return false;
    }
    items.push(item);
    true
}

/// Drop the element with `id`. Returns whether something was removed.
pub fn remove(items: &mut Vec<CollectionItem>, id: u32) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}
