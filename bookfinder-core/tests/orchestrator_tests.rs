//! Integration tests for the search orchestrator
//!
//! The orchestrator is driven by in-process sources so every response can
//! be timed by the test: `MemorySource` for plain searches, and small test
//! sources that count calls, replay scripted outcomes, or hold each page's
//! response until the test releases it.

use async_trait::async_trait;
use bookfinder_core::source::SourceResult;
use bookfinder_core::{
    BookDetails, BookSource, BookSummary, MemorySource, RemoteError, SearchFilters,
    SearchOrchestrator, SearchPage, SearchState,
};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tokio::task::yield_now;

// =============================================================================
// Test sources
// =============================================================================

/// Catalog of `count` books all matching "dune"
fn dune_catalog(count: usize) -> MemorySource {
    (1..=count).fold(MemorySource::new(), |source, i| {
        source.with_book(
            BookSummary::new(format!("/works/OL{i}W"), format!("Dune volume {i}"))
                .with_author("Frank Herbert"),
        )
    })
}

fn page_of(titles: &[&str], total: u64) -> SearchPage {
    let books = titles
        .iter()
        .enumerate()
        .map(|(i, title)| BookSummary::new(format!("/works/OL{i}W"), *title))
        .collect();
    SearchPage::new(books, total)
}

fn titles(state: &SearchState) -> Vec<&str> {
    state.books.iter().map(|b| b.title.as_str()).collect()
}

/// Wraps a source and counts search calls
struct CountingSource {
    inner: MemorySource,
    calls: AtomicUsize,
}

#[async_trait]
impl BookSource for CountingSource {
    async fn search(
        &self,
        filters: &SearchFilters,
        page: u32,
        page_size: u32,
    ) -> SourceResult<SearchPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.search(filters, page, page_size).await
    }

    async fn fetch_details(&self, work_key: &str) -> Option<BookDetails> {
        self.inner.fetch_details(work_key).await
    }
}

/// Replays scripted outcomes, one per search call
struct ScriptedSource {
    outcomes: Mutex<VecDeque<SourceResult<SearchPage>>>,
}

#[async_trait]
impl BookSource for ScriptedSource {
    async fn search(&self, _: &SearchFilters, _: u32, _: u32) -> SourceResult<SearchPage> {
        let next = self.outcomes.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(SearchPage::empty()))
    }

    async fn fetch_details(&self, _: &str) -> Option<BookDetails> {
        None
    }
}

/// Holds the response for each page until the test sends it
struct GatedSource {
    gates: Mutex<HashMap<u32, oneshot::Receiver<SearchPage>>>,
}

fn gated(pages: &[u32]) -> (GatedSource, HashMap<u32, oneshot::Sender<SearchPage>>) {
    let mut gates = HashMap::new();
    let mut senders = HashMap::new();
    for page in pages {
        let (tx, rx) = oneshot::channel();
        gates.insert(*page, rx);
        senders.insert(*page, tx);
    }
    (
        GatedSource {
            gates: Mutex::new(gates),
        },
        senders,
    )
}

#[async_trait]
impl BookSource for GatedSource {
    async fn search(&self, _: &SearchFilters, page: u32, _: u32) -> SourceResult<SearchPage> {
        let gate = self.gates.lock().unwrap().remove(&page);
        match gate {
            Some(rx) => Ok(rx.await.unwrap_or_default()),
            None => Ok(SearchPage::empty()),
        }
    }

    async fn fetch_details(&self, _: &str) -> Option<BookDetails> {
        None
    }
}

/// Yield until the orchestrator state satisfies `ready`
async fn wait_for(orchestrator: &SearchOrchestrator, ready: impl Fn(&SearchState) -> bool) {
    while !ready(&orchestrator.state()) {
        yield_now().await;
    }
}

// =============================================================================
// Basic searches
// =============================================================================

#[tokio::test]
async fn test_search_populates_state() {
    let orchestrator = SearchOrchestrator::new(Arc::new(dune_catalog(57)));

    orchestrator.perform_search("  dune  ", 1).await;

    let state = orchestrator.state();
    assert!(state.search_performed);
    assert!(!state.loading);
    assert_eq!(state.query, "dune");
    assert_eq!(state.page, 1);
    assert_eq!(state.total_results, 57);
    assert_eq!(state.books.len(), 20);
    assert_eq!(state.page_count(), 3);
    assert_eq!(
        state.result_summary().as_deref(),
        Some("Found 57 books for \"dune\"")
    );
}

#[tokio::test]
async fn test_loading_while_request_outstanding() {
    let (source, mut senders) = gated(&[1]);
    let orchestrator = SearchOrchestrator::new(Arc::new(source));
    let release = senders.remove(&1).unwrap();

    let search = orchestrator.perform_search("dune", 1);
    let driver = async {
        wait_for(&orchestrator, |s| s.loading).await;
        let in_flight = orchestrator.state();
        assert!(in_flight.search_performed);
        assert_eq!(in_flight.query, "dune");
        assert!(in_flight.books.is_empty());

        release.send(page_of(&["Dune"], 1)).unwrap();
    };
    tokio::join!(search, driver);

    let state = orchestrator.state();
    assert!(!state.loading);
    assert_eq!(titles(&state), vec!["Dune"]);
}

#[tokio::test]
async fn test_empty_query_is_noop() {
    let source = Arc::new(CountingSource {
        inner: dune_catalog(5),
        calls: AtomicUsize::new(0),
    });
    let orchestrator = SearchOrchestrator::new(source.clone());
    let mut changes = orchestrator.subscribe();

    let before = orchestrator.state();
    orchestrator.perform_search("", 1).await;
    orchestrator.perform_search("   \t ", 3).await;

    assert_eq!(orchestrator.state(), before);
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    assert!(!changes.has_changed().unwrap());
}

#[tokio::test]
async fn test_page_zero_treated_as_one() {
    let orchestrator = SearchOrchestrator::new(Arc::new(dune_catalog(5)));

    orchestrator.perform_search("dune", 0).await;

    assert_eq!(orchestrator.state().page, 1);
}

#[tokio::test]
async fn test_year_query_filters_by_year() {
    let source = MemorySource::new()
        .with_book(BookSummary::new("/works/OL1W", "Nineteen Eighty-Four").with_year(1949))
        .with_book(BookSummary::new("/works/OL2W", "1984 and Beyond").with_year(1983))
        .with_book(BookSummary::new("/works/OL3W", "Neuromancer").with_year(1984));
    let orchestrator = SearchOrchestrator::new(Arc::new(source));

    orchestrator.perform_search("1984", 1).await;

    let state = orchestrator.state();
    assert_eq!(state.query, "1984");
    assert_eq!(titles(&state), vec!["Neuromancer"]);
}

#[tokio::test]
async fn test_subscribers_see_applied_results() {
    let orchestrator = SearchOrchestrator::new(Arc::new(dune_catalog(3)));
    let mut changes = orchestrator.subscribe();

    orchestrator.perform_search("dune", 1).await;

    assert!(changes.has_changed().unwrap());
    let seen = changes.borrow_and_update().clone();
    assert_eq!(seen.total_results, 3);
    assert!(!seen.loading);
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_source_error_keeps_previous_results() {
    let source = ScriptedSource {
        outcomes: Mutex::new(VecDeque::from([
            Ok(page_of(&["Dune", "Dune Messiah"], 2)),
            Err(RemoteError::Transport("connection reset".to_string())),
        ])),
    };
    let orchestrator = SearchOrchestrator::new(Arc::new(source));

    orchestrator.perform_search("dune", 1).await;
    orchestrator.perform_search("dune", 2).await;

    let state = orchestrator.state();
    assert!(!state.loading);
    assert_eq!(state.page, 2);
    assert_eq!(state.total_results, 2);
    assert_eq!(titles(&state), vec!["Dune", "Dune Messiah"]);
}

// =============================================================================
// Reset and pagination
// =============================================================================

#[tokio::test]
async fn test_reset_keeps_page_and_total() {
    let orchestrator = SearchOrchestrator::new(Arc::new(dune_catalog(57)));
    orchestrator.perform_search("dune", 2).await;

    orchestrator.reset_search();

    let state = orchestrator.state();
    assert!(!state.search_performed);
    assert!(state.books.is_empty());
    assert_eq!(state.query, "");
    assert_eq!(state.total_results, 57);
    assert_eq!(state.page, 2);
}

#[tokio::test]
async fn test_pagination_round_trip() {
    let orchestrator = SearchOrchestrator::new(Arc::new(dune_catalog(57)));

    orchestrator.perform_search("dune", 2).await;
    let second = orchestrator.state();
    assert_eq!(second.page, 2);
    assert_eq!(second.books[0].title, "Dune volume 21");

    orchestrator.perform_search("dune", 1).await;
    let first = orchestrator.state();
    assert_eq!(first.query, "dune");
    assert_eq!(first.page, 1);
    assert_eq!(first.books[0].title, "Dune volume 1");
}

#[tokio::test]
async fn test_page_navigation() {
    let orchestrator = SearchOrchestrator::new(Arc::new(dune_catalog(57)));
    orchestrator.perform_search("dune", 1).await;

    orchestrator.next_page().await;
    assert_eq!(orchestrator.state().page, 2);

    orchestrator.go_to_page(3).await;
    let last = orchestrator.state();
    assert_eq!(last.page, 3);
    assert_eq!(last.books.len(), 17);

    // Past the last page
    orchestrator.next_page().await;
    assert_eq!(orchestrator.state().page, 3);

    orchestrator.previous_page().await;
    assert_eq!(orchestrator.state().page, 2);

    orchestrator.go_to_page(0).await;
    assert_eq!(orchestrator.state().page, 2);
}

#[tokio::test]
async fn test_page_navigation_without_query() {
    let source = Arc::new(CountingSource {
        inner: dune_catalog(57),
        calls: AtomicUsize::new(0),
    });
    let orchestrator = SearchOrchestrator::new(source.clone());

    orchestrator.next_page().await;
    orchestrator.go_to_page(2).await;

    orchestrator.perform_search("dune", 1).await;
    orchestrator.reset_search();
    orchestrator.next_page().await;

    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Overlapping searches
// =============================================================================

#[tokio::test]
async fn test_stale_response_does_not_overwrite_newer() {
    let (source, mut senders) = gated(&[1, 2]);
    let orchestrator = Arc::new(SearchOrchestrator::new(Arc::new(source)));

    let first = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.perform_search("dune", 1).await }
    });
    wait_for(&orchestrator, |s| s.loading && s.page == 1).await;

    let second = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.perform_search("dune", 2).await }
    });
    wait_for(&orchestrator, |s| s.page == 2).await;

    senders
        .remove(&2)
        .unwrap()
        .send(page_of(&["Page two"], 40))
        .unwrap();
    second.await.unwrap();
    assert_eq!(titles(&orchestrator.state()), vec!["Page two"]);

    senders
        .remove(&1)
        .unwrap()
        .send(page_of(&["Page one"], 40))
        .unwrap();
    first.await.unwrap();

    let state = orchestrator.state();
    assert!(!state.loading);
    assert_eq!(state.page, 2);
    assert_eq!(titles(&state), vec!["Page two"]);
}

#[tokio::test]
async fn test_loading_held_until_newest_completes() {
    let (source, mut senders) = gated(&[1, 2]);
    let orchestrator = Arc::new(SearchOrchestrator::new(Arc::new(source)));

    let first = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.perform_search("dune", 1).await }
    });
    wait_for(&orchestrator, |s| s.loading && s.page == 1).await;

    let second = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.perform_search("dune", 2).await }
    });
    wait_for(&orchestrator, |s| s.page == 2).await;

    senders
        .remove(&1)
        .unwrap()
        .send(page_of(&["Page one"], 40))
        .unwrap();
    first.await.unwrap();

    let waiting = orchestrator.state();
    assert!(waiting.loading);
    assert!(waiting.books.is_empty());

    senders
        .remove(&2)
        .unwrap()
        .send(page_of(&["Page two"], 40))
        .unwrap();
    second.await.unwrap();

    let state = orchestrator.state();
    assert!(!state.loading);
    assert_eq!(titles(&state), vec!["Page two"]);
}

#[tokio::test]
async fn test_reset_discards_in_flight_response() {
    let (source, mut senders) = gated(&[1]);
    let orchestrator = Arc::new(SearchOrchestrator::new(Arc::new(source)));

    let search = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.perform_search("dune", 1).await }
    });
    wait_for(&orchestrator, |s| s.loading).await;

    orchestrator.reset_search();
    senders
        .remove(&1)
        .unwrap()
        .send(page_of(&["Dune"], 1))
        .unwrap();
    search.await.unwrap();

    let state = orchestrator.state();
    assert!(!state.search_performed);
    assert!(!state.loading);
    assert!(state.books.is_empty());
    assert_eq!(state.query, "");
}
