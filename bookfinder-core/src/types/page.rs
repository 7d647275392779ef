//! One page of search results

use super::BookSummary;
use serde::{Deserialize, Serialize};

/// Books on the requested page plus the total match count
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchPage {
    pub books: Vec<BookSummary>,

    /// Total matches across all pages
    pub total: u64,
}

impl SearchPage {
    pub fn new(books: Vec<BookSummary>, total: u64) -> Self {
        Self { books, total }
    }

    /// The result reported when the catalog is unavailable
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
