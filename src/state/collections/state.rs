//! State for the personal collections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::Breed;
use crate::state::mvi::ViewState;

use super::membership;

/// Group shown for breeds the API does not classify.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// The three user-curated collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionType {
    Wishlist,
    ReadyToAdopt,
    Owned,
}

impl CollectionType {
    pub const ALL: [CollectionType; 3] = [
        CollectionType::Wishlist,
        CollectionType::ReadyToAdopt,
        CollectionType::Owned,
    ];

    /// Wire/CLI name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionType::Wishlist => "wishlist",
            CollectionType::ReadyToAdopt => "readyToAdopt",
            CollectionType::Owned => "owned",
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            CollectionType::Wishlist => "Wish List",
            CollectionType::ReadyToAdopt => "Ready to Adopt",
            CollectionType::Owned => "Owned",
        }
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown collection '{0}' (expected wishlist, readyToAdopt or owned)")]
pub struct ParseCollectionError(pub String);

impl FromStr for CollectionType {
    type Err = ParseCollectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wishlist" | "wish" => Ok(CollectionType::Wishlist),
            "readytoadopt" | "ready-to-adopt" | "ready_to_adopt" | "ready" => {
                Ok(CollectionType::ReadyToAdopt)
            }
            "owned" => Ok(CollectionType::Owned),
            _ => Err(ParseCollectionError(s.to_string())),
        }
    }
}

/// Lightweight reference to a breed stored in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub id: u32,
    pub name: String,
    pub reference_image_id: Option<String>,
    pub breed_group: String,
}

impl CollectionItem {
    /// Project a breed, defaulting the group to [`UNKNOWN_GROUP`].
    pub fn from_breed(breed: &Breed) -> Self {
        Self {
            id: breed.id,
            name: breed.name.clone(),
            reference_image_id: breed.image_id().map(str::to_string),
            breed_group: breed.group().unwrap_or(UNKNOWN_GROUP).to_string(),
        }
    }
}

/// Three ordered collections plus the one currently being viewed.
///
/// Membership in one collection says nothing about the others: a breed can
/// be wishlisted and owned at the same time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionsState {
    pub wishlist: Vec<CollectionItem>,
    pub ready_to_adopt: Vec<CollectionItem>,
    pub owned: Vec<CollectionItem>,
    /// `None` means the full catalog is shown.
    pub active_collection: Option<CollectionType>,
}

impl ViewState for CollectionsState {}

impl CollectionsState {
    pub fn items(&self, collection: CollectionType) -> &[CollectionItem] {
        match collection {
            CollectionType::Wishlist => &self.wishlist,
            CollectionType::ReadyToAdopt => &self.ready_to_adopt,
            CollectionType::Owned => &self.owned,
        }
    }

    pub(super) fn items_mut(&mut self, collection: CollectionType) -> &mut Vec<CollectionItem> {
        match collection {
            CollectionType::Wishlist => &mut self.wishlist,
            CollectionType::ReadyToAdopt => &mut self.ready_to_adopt,
            CollectionType::Owned => &mut self.owned,
        }
    }

    /// Whether `id` is in `collection`.
    pub fn contains(&self, collection: CollectionType, id: u32) -> bool {
        membership::contains(self.items(collection), id)
    }

    /// Collections `id` currently belongs to, in tab order.
    pub fn memberships(&self, id: u32) -> Vec<CollectionType> {
        CollectionType::ALL
            .into_iter()
            .filter(|c| self.contains(*c, id))
            .collect()
    }

    /// Items of the active collection, if one is selected.
    pub fn active_items(&self) -> Option<(CollectionType, &[CollectionItem])> {
        self.active_collection.map(|c| (c, self.items(c)))
    }
}
