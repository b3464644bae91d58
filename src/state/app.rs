//! Root state: catalog and collections side by side.

use std::ops::Range;

use crate::api::Breed;
use crate::pagination;

use super::catalog::{CatalogIntent, CatalogReducer, CatalogState, CatalogStatus, LOAD_ERROR_MESSAGE};
use super::collections::{CollectionItem, CollectionType, CollectionsIntent, CollectionsReducer, CollectionsState};
use super::mvi::{Intent, Reducer, ViewState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub catalog: CatalogState,
    pub collections: CollectionsState,
}

impl ViewState for AppState {}

#[derive(Debug, Clone)]
pub enum AppIntent {
    Catalog(CatalogIntent),
    Collections(CollectionsIntent),
}

impl Intent for AppIntent {}

impl From<CatalogIntent> for AppIntent {
    fn from(intent: CatalogIntent) -> Self {
        AppIntent::Catalog(intent)
    }
}

impl From<CollectionsIntent> for AppIntent {
    fn from(intent: CollectionsIntent) -> Self {
        AppIntent::Collections(intent)
    }
}

/// Routes each intent to the reducer that owns its half of the state.
/// The two halves never see each other's intents.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let AppState {
            catalog,
            collections,
        } = state;
        match intent {
            AppIntent::Catalog(intent) => AppState {
                catalog: CatalogReducer::reduce(catalog, intent),
                collections,
            },
            AppIntent::Collections(intent) => AppState {
                catalog,
                collections: CollectionsReducer::reduce(collections, intent),
            },
        }
    }
}

/// What the home screen should show.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeView<'a> {
    Loading,
    Failed(&'a str),
    Collection {
        collection: CollectionType,
        items: &'a [CollectionItem],
    },
    NoResults {
        query: &'a str,
    },
    Breeds {
        items: &'a [Breed],
        /// Visible page buttons, `None` when pagination is hidden.
        pages: Option<Range<u32>>,
        current_page: u32,
        total_pages: u32,
    },
}

impl AppState {
    /// Pick the home screen. Fetch status wins over everything, then an
    /// active collection, then the catalog itself.
    pub fn home_view(&self) -> HomeView<'_> {
        let catalog = &self.catalog;
        match catalog.status {
            CatalogStatus::Loading => return HomeView::Loading,
            CatalogStatus::Failed => {
                return HomeView::Failed(catalog.error.as_deref().unwrap_or(LOAD_ERROR_MESSAGE))
            }
            CatalogStatus::Idle | CatalogStatus::Succeeded => {}
        }

        if let Some((collection, items)) = self.collections.active_items() {
            return HomeView::Collection { collection, items };
        }

        if catalog.items.is_empty() && catalog.is_searching() {
            return HomeView::NoResults {
                query: &catalog.search_query,
            };
        }

        let pages = pagination::is_visible(catalog.total_pages)
            .then(|| pagination::visible_pages(catalog.current_page, catalog.total_pages));

        HomeView::Breeds {
            items: &catalog.items,
            pages,
            current_page: catalog.current_page,
            total_pages: catalog.total_pages,
        }
    }
}
