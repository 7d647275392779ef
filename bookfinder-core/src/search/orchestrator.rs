//! Search orchestrator

use super::{SearchState, PAGE_SIZE};
use crate::source::BookSource;
use crate::types::SearchFilters;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error};

/// Owns the [`SearchState`] and drives searches against a [`BookSource`]
///
/// Calls may overlap. Each call takes a request id when it starts and its
/// response is applied only if no newer call has started since, so a slow
/// superseded response can never overwrite a newer one. There is no
/// cancellation: superseded requests still run to completion.
pub struct SearchOrchestrator {
    source: Arc<dyn BookSource>,
    state: watch::Sender<SearchState>,
    /// Id of the newest request; only read or bumped inside state writes
    latest: AtomicU64,
}

impl SearchOrchestrator {
    pub fn new(source: Arc<dyn BookSource>) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            source,
            state,
            latest: AtomicU64::new(0),
        }
    }

    /// The source searches are sent to
    pub fn source(&self) -> &Arc<dyn BookSource> {
        &self.source
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Search `raw_query` and show the given page (0 is treated as 1)
    ///
    /// Input that is empty after trimming is ignored without touching state.
    pub async fn perform_search(&self, raw_query: &str, page: u32) {
        let Some(filters) = SearchFilters::from_query(raw_query) else {
            debug!("Ignoring empty query");
            return;
        };
        let page = page.max(1);

        let mut ticket = 0;
        self.state.send_modify(|state| {
            ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            state.loading = true;
            state.search_performed = true;
            state.page = page;
            state.query = filters.text.clone();
        });

        debug!(
            "Search #{} for {:?} (year: {:?}) page {}",
            ticket, filters.text, filters.year_exact, page
        );
        let outcome = self.source.search(&filters, page, PAGE_SIZE).await;

        self.state.send_if_modified(|state| {
            if self.latest.load(Ordering::SeqCst) != ticket {
                debug!("Discarding stale response for search #{}", ticket);
                return false;
            }

            match outcome {
                Ok(result) => {
                    state.books = result.books;
                    state.total_results = result.total;
                }
                Err(e) => error!("Search failed: {}", e),
            }
            state.loading = false;
            true
        });
    }

    /// Leave the results view
    ///
    /// Clears the query and books. Page and total are kept until the next
    /// search. Requests still in flight are discarded when they complete.
    pub fn reset_search(&self) {
        self.state.send_modify(|state| {
            self.latest.fetch_add(1, Ordering::SeqCst);
            state.search_performed = false;
            state.books.clear();
            state.query.clear();
            state.loading = false;
        });
    }

    /// Re-run the current query on another page
    ///
    /// Does nothing without a current query or when `page` is out of range.
    pub async fn go_to_page(&self, page: u32) {
        let (query, valid) = {
            let state = self.state.borrow();
            (state.query.clone(), state.has_page(page))
        };
        if query.is_empty() || !valid {
            debug!("Ignoring page change to {}", page);
            return;
        }
        self.perform_search(&query, page).await;
    }

    pub async fn next_page(&self) {
        let page = self.state.borrow().page.saturating_add(1);
        self.go_to_page(page).await;
    }

    pub async fn previous_page(&self) {
        let page = self.state.borrow().page.saturating_sub(1);
        self.go_to_page(page).await;
    }
}
