//! Observable search state

use super::PAGE_SIZE;
use crate::types::BookSummary;
use serde::Serialize;

/// Everything the presentation layer needs to render a search
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchState {
    /// Last trimmed query, empty after a reset
    pub query: String,

    /// Current page (1-indexed, never 0)
    pub page: u32,

    pub page_size: u32,

    /// Total matches reported for the last applied response
    pub total_results: u64,

    /// True while the newest request is outstanding
    pub loading: bool,

    /// Whether the results view is active
    pub search_performed: bool,

    /// Books on the current page
    pub books: Vec<BookSummary>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size: PAGE_SIZE,
            total_results: 0,
            loading: false,
            search_performed: false,
            books: Vec::new(),
        }
    }
}

impl SearchState {
    /// Number of pages for the current total
    pub fn page_count(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        let pages = self.total_results.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Whether `page` is a valid target for the current total
    pub fn has_page(&self, page: u32) -> bool {
        page >= 1 && page <= self.page_count()
    }

    /// "Found N books for "query"", if there is anything to report
    pub fn result_summary(&self) -> Option<String> {
        if self.total_results == 0 || self.query.is_empty() {
            return None;
        }
        Some(format!(
            "Found {} books for \"{}\"",
            self.total_results, self.query
        ))
    }
}
