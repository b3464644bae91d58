//! State for the breed catalog.

use std::fmt;

use crate::api::Breed;
use crate::state::mvi::ViewState;

/// Total number of breeds the API serves. The API does not report totals,
/// so page counts are derived from this.
pub const KNOWN_BREED_COUNT: u32 = 172;

/// Breeds per catalog page.
pub const PAGE_SIZE: u32 = 12;

/// Maximum number of search hits displayed.
pub const SEARCH_DISPLAY_LIMIT: usize = 12;

/// The only error text failed fetches leave in state.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load data";

/// Page count while browsing: `ceil(KNOWN_BREED_COUNT / PAGE_SIZE)`.
pub const fn browse_total_pages() -> u32 {
    KNOWN_BREED_COUNT.div_ceil(PAGE_SIZE)
}

/// Fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl CatalogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogStatus::Idle => "idle",
            CatalogStatus::Loading => "loading",
            CatalogStatus::Succeeded => "succeeded",
            CatalogStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for CatalogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag of one asynchronous catalog intent. Issued in increasing order by
/// the store, so a smaller id always belongs to an older request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Current page (or search result) of the catalog.
///
/// Browse and search are told apart only by `search_query` being empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub items: Vec<Breed>,
    pub status: CatalogStatus,
    pub error: Option<String>,
    /// Zero-based.
    pub current_page: u32,
    pub total_pages: u32,
    pub search_query: String,
    /// Most recent async intent that went pending.
    pub latest_request: Option<RequestId>,
}

impl ViewState for CatalogState {}

impl CatalogState {
    pub fn is_searching(&self) -> bool {
        !self.search_query.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }

    /// Whether a settlement for `request` would be discarded.
    pub fn is_stale(&self, request: RequestId) -> bool {
        self.latest_request.is_some_and(|latest| request < latest)
    }

    pub fn find(&self, id: u32) -> Option<&Breed> {
        self.items.iter().find(|b| b.id == id)
    }
}
