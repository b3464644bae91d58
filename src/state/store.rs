//! The root store: serialized dispatch plus async intent orchestration.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::api::{Breed, BreedGateway};
use crate::pagination;

use super::app::{AppIntent, AppReducer, AppState};
use super::catalog::{
    AsyncPhase, CatalogIntent, CatalogStatus, PagePayload, RequestId, SearchPayload, PAGE_SIZE,
    SEARCH_DISPLAY_LIMIT,
};
use super::collections::{CollectionItem, CollectionType, CollectionsIntent};
use super::mvi::Reducer;

/// Handle to the application state.
///
/// Cheap to clone; every clone sees the same state. Dispatch takes the write
/// lock, so intents are applied one at a time even when several async
/// requests settle concurrently.
pub struct Store<G: BreedGateway> {
    inner: Arc<StoreInner<G>>,
}

struct StoreInner<G> {
    state: RwLock<AppState>,
    gateway: G,
    next_request: AtomicU64,
    revision: watch::Sender<u64>,
}

impl<G: BreedGateway> Clone for Store<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: BreedGateway> Store<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_state(gateway, AppState::default())
    }

    /// Start from an existing state instead of the default one.
    pub fn with_state(gateway: G, state: AppState) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(state),
                gateway,
                next_request: AtomicU64::new(1),
                revision,
            }),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.inner.gateway
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.inner.state.read().clone()
    }

    /// Borrow the state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.inner.state.read())
    }

    /// Receiver whose value is bumped after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }

    /// Apply one intent and notify subscribers.
    pub fn dispatch(&self, intent: impl Into<AppIntent>) {
        let intent = intent.into();
        {
            let mut guard = self.inner.state.write();
            let current = std::mem::take(&mut *guard);
            *guard = AppReducer::reduce(current, intent);
        }
        self.inner.revision.send_modify(|rev| *rev += 1);
    }

    fn next_request(&self) -> RequestId {
        RequestId(self.inner.next_request.fetch_add(1, Ordering::Relaxed))
    }

    fn settle(&self, intent: CatalogIntent) {
        if let Some(request) = intent.request() {
            if self.read(|s| s.catalog.is_stale(request)) {
                tracing::debug!(request = %request, "Discarding superseded catalog response");
            }
        }
        self.dispatch(intent);
    }

    // -- Catalog ---------------------------------------------------------------

    /// Load one catalog page.
    pub async fn fetch_page(&self, page: u32) {
        let request = self.next_request();
        self.dispatch(CatalogIntent::FetchPage {
            request,
            phase: AsyncPhase::Pending,
        });

        let phase = match self.inner.gateway.fetch_breeds(page, PAGE_SIZE).await {
            Ok(breeds) => {
                tracing::debug!(request = %request, page, count = breeds.len(), "Breed page loaded");
                AsyncPhase::Succeeded(PagePayload { breeds, page })
            }
            Err(e) => {
                tracing::warn!(
                    request = %request,
                    page,
                    kind = e.kind(),
                    error = %e,
                    "Failed to load breed page"
                );
                AsyncPhase::Failed(e.to_string())
            }
        };

        self.settle(CatalogIntent::FetchPage { request, phase });
    }

    /// Search the catalog. A blank query reloads the first page instead,
    /// but is still recorded as the (empty) search query.
    pub async fn search(&self, query: &str) {
        let request = self.next_request();
        self.dispatch(CatalogIntent::Search {
            request,
            phase: AsyncPhase::Pending,
        });

        let gateway = &self.inner.gateway;
        let result = if query.trim().is_empty() {
            gateway.fetch_breeds(0, PAGE_SIZE).await
        } else {
            gateway.search_breeds(query, SEARCH_DISPLAY_LIMIT).await
        };

        let phase = match result {
            Ok(breeds) => {
                tracing::debug!(request = %request, query, count = breeds.len(), "Search completed");
                AsyncPhase::Succeeded(SearchPayload {
                    breeds,
                    query: query.to_string(),
                })
            }
            Err(e) => {
                tracing::warn!(
                    request = %request,
                    query,
                    kind = e.kind(),
                    error = %e,
                    "Breed search failed"
                );
                AsyncPhase::Failed(e.to_string())
            }
        };

        self.settle(CatalogIntent::Search { request, phase });
    }

    pub fn set_current_page(&self, page: u32) {
        self.dispatch(CatalogIntent::SetCurrentPage(page));
    }

    pub fn clear_search(&self) {
        self.dispatch(CatalogIntent::ClearSearch);
    }

    /// Move to `page` if it is in range, then fetch it.
    /// Returns `false` without dispatching anything when out of range.
    pub async fn go_to_page(&self, page: i64) -> bool {
        let total_pages = self.read(|s| s.catalog.total_pages);
        let Ok(target) = u32::try_from(page) else {
            return false;
        };
        if !pagination::can_navigate(page, total_pages) {
            return false;
        }
        self.set_current_page(target);
        self.fetch_page(target).await;
        true
    }

    /// Load the first page when nothing has been fetched yet and the
    /// catalog is what is being shown. Returns whether a fetch happened.
    pub async fn ensure_loaded(&self) -> bool {
        let needs_load = self.read(|s| {
            s.catalog.status == CatalogStatus::Idle && s.collections.active_collection.is_none()
        });
        if needs_load {
            self.fetch_page(0).await;
        }
        needs_load
    }

    // -- Collections -----------------------------------------------------------

    pub fn add_to_collection(&self, collection: CollectionType, item: CollectionItem) {
        tracing::debug!(collection = %collection, id = item.id, "Adding to collection");
        self.dispatch(CollectionsIntent::Add { collection, item });
    }

    pub fn add_breed(&self, collection: CollectionType, breed: &Breed) {
        self.add_to_collection(collection, CollectionItem::from_breed(breed));
    }

    pub fn remove_from_collection(&self, collection: CollectionType, item_id: u32) {
        tracing::debug!(collection = %collection, id = item_id, "Removing from collection");
        self.dispatch(CollectionsIntent::Remove {
            collection,
            item_id,
        });
    }

    /// Add the breed if absent, remove it otherwise.
    /// Returns whether the breed is in the collection afterwards.
    pub fn toggle_collection(&self, collection: CollectionType, breed: &Breed) -> bool {
        if self.is_in_collection(collection, breed.id) {
            self.remove_from_collection(collection, breed.id);
            false
        } else {
            self.add_breed(collection, breed);
            true
        }
    }

    pub fn is_in_collection(&self, collection: CollectionType, id: u32) -> bool {
        self.read(|s| s.collections.contains(collection, id))
    }

    pub fn set_active_collection(&self, collection: Option<CollectionType>) {
        self.dispatch(CollectionsIntent::SetActive(collection));
    }

    /// Adopt everything ready to adopt. Returns how many items were moved.
    pub fn adopt_breeds(&self) -> usize {
        let count = self.read(|s| s.collections.ready_to_adopt.len());
        self.dispatch(CollectionsIntent::Adopt);
        tracing::info!(count, "Breeds adopted");
        count
    }
}
