//! Intents for the catalog state machine.

use crate::api::Breed;
use crate::state::mvi::Intent;

use super::state::RequestId;

/// Lifecycle phase of an asynchronous intent.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncPhase<T> {
    /// Request sent, nothing back yet.
    Pending,
    /// Gateway call resolved.
    Succeeded(T),
    /// Gateway call rejected. The reason is for logs; state keeps only the
    /// generic message.
    Failed(String),
}

/// Result of a page fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePayload {
    pub breeds: Vec<Breed>,
    pub page: u32,
}

/// Result of a search. `query` is the raw text the user typed.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPayload {
    pub breeds: Vec<Breed>,
    pub query: String,
}

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// Move the page cursor. Bounds are the caller's business.
    SetCurrentPage(u32),

    /// Forget the search text. Items stay as they are.
    ClearSearch,

    FetchPage {
        request: RequestId,
        phase: AsyncPhase<PagePayload>,
    },

    Search {
        request: RequestId,
        phase: AsyncPhase<SearchPayload>,
    },
}

impl Intent for CatalogIntent {}

impl CatalogIntent {
    /// Request id of an async intent, `None` for the synchronous ones.
    pub fn request(&self) -> Option<RequestId> {
        match self {
            CatalogIntent::FetchPage { request, .. } | CatalogIntent::Search { request, .. } => {
                Some(*request)
            }
            _ => None,
        }
    }
}
