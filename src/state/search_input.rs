//! Debounced search box.

use std::time::Duration;

use parking_lot::Mutex;

use crate::api::BreedGateway;
use crate::config::SearchConfig;
use crate::debounce::Debouncer;

use super::store::Store;

/// Turns keystrokes into search intents.
///
/// Every call to [`on_input`](Self::on_input) restarts the quiet period.
/// When it elapses the latest text is searched, unless it already equals
/// the catalog's active query.
pub struct SearchInput<G: BreedGateway> {
    store: Store<G>,
    debouncer: Debouncer,
    text: Mutex<String>,
}

impl<G: BreedGateway> SearchInput<G> {
    pub fn new(store: Store<G>, delay: Duration) -> Self {
        let text = store.read(|s| s.catalog.search_query.clone());
        Self {
            store,
            debouncer: Debouncer::new(delay),
            text: Mutex::new(text),
        }
    }

    pub fn from_config(store: Store<G>, config: &SearchConfig) -> Self {
        Self::new(store, Duration::from_millis(config.debounce_ms))
    }

    /// Current contents of the box.
    pub fn text(&self) -> String {
        self.text.lock().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn on_input(&self, text: impl Into<String>) {
        let text = text.into();
        *self.text.lock() = text.clone();

        let store = self.store.clone();
        self.debouncer.schedule(async move {
            let current = store.read(|s| s.catalog.search_query.clone());
            if text == current {
                tracing::debug!(query = %text, "Search text unchanged, skipping");
                return;
            }
            store.search(&text).await;
        });
    }

    /// Forget pending input without searching.
    pub fn cancel(&self) {
        self.debouncer.cancel();
    }
}
