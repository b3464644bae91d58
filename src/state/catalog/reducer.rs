//! Reducer for the catalog state machine.

use crate::state::mvi::Reducer;

use super::intent::{AsyncPhase, CatalogIntent, PagePayload, SearchPayload};
use super::state::{browse_total_pages, CatalogState, CatalogStatus, RequestId, LOAD_ERROR_MESSAGE};

/// Catalog transitions.
///
/// Successful fetch and search results have their own arms and are matched
/// first. Every other async phase falls through to the shared pending and
/// failed handling, whichever intent it belongs to. Settlements older than
/// the latest pending request are dropped.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if is_stale_settlement(&state, &intent) {
            return state;
        }

        match intent {
            CatalogIntent::SetCurrentPage(page) => CatalogState {
                current_page: page,
                ..state
            },
            CatalogIntent::ClearSearch => CatalogState {
                search_query: String::new(),
                ..state
            },

            CatalogIntent::FetchPage {
                phase: AsyncPhase::Succeeded(payload),
                ..
            } => page_loaded(state, payload),
            CatalogIntent::Search {
                phase: AsyncPhase::Succeeded(payload),
                ..
            } => search_loaded(state, payload),

            CatalogIntent::FetchPage {
                request,
                phase: AsyncPhase::Pending,
            }
            | CatalogIntent::Search {
                request,
                phase: AsyncPhase::Pending,
            } => pending(state, request),
            CatalogIntent::FetchPage {
                phase: AsyncPhase::Failed(_),
                ..
            }
            | CatalogIntent::Search {
                phase: AsyncPhase::Failed(_),
                ..
            } => failed(state),
        }
    }
}

fn is_stale_settlement(state: &CatalogState, intent: &CatalogIntent) -> bool {
    let settled = matches!(
        intent,
        CatalogIntent::FetchPage {
            phase: AsyncPhase::Succeeded(_) | AsyncPhase::Failed(_),
            ..
        } | CatalogIntent::Search {
            phase: AsyncPhase::Succeeded(_) | AsyncPhase::Failed(_),
            ..
        }
    );
    settled && intent.request().is_some_and(|r| state.is_stale(r))
}

fn page_loaded(state: CatalogState, payload: PagePayload) -> CatalogState {
    CatalogState {
        items: payload.breeds,
        status: CatalogStatus::Succeeded,
        current_page: payload.page,
        total_pages: browse_total_pages(),
        ..state
    }
}

fn search_loaded(state: CatalogState, payload: SearchPayload) -> CatalogState {
    // Search results are never paginated further.
    let total_pages = if payload.query.is_empty() {
        browse_total_pages()
    } else {
        1
    };
    CatalogState {
        items: payload.breeds,
        status: CatalogStatus::Succeeded,
        search_query: payload.query,
        current_page: 0,
        total_pages,
        ..state
    }
}

fn pending(state: CatalogState, request: RequestId) -> CatalogState {
    let latest = state.latest_request.map_or(request, |latest| latest.max(request));
    CatalogState {
        status: CatalogStatus::Loading,
        error: None,
        latest_request: Some(latest),
        ..state
    }
}

fn failed(state: CatalogState) -> CatalogState {
    CatalogState {
        status: CatalogStatus::Failed,
        error: Some(LOAD_ERROR_MESSAGE.to_string()),
        ..state
    }
}
