//! Breed catalog: current page or search result plus fetch lifecycle.
//!
//! - `state.rs` - `CatalogState`, status enum, paging constants
//! - `intent.rs` - Page/search intents tagged with `AsyncPhase`
//! - `reducer.rs` - Transitions (Idle → Loading → Succeeded | Failed)

mod intent;
mod reducer;
mod state;

pub use intent::{AsyncPhase, CatalogIntent, PagePayload, SearchPayload};
pub use reducer::CatalogReducer;
pub use state::{
    browse_total_pages, CatalogState, CatalogStatus, RequestId, KNOWN_BREED_COUNT,
    LOAD_ERROR_MESSAGE, PAGE_SIZE, SEARCH_DISPLAY_LIMIT,
};
