//! In-memory catalog (for testing and demos)

use super::{BookSource, SourceResult};
use crate::types::{BookDetails, BookSummary, SearchFilters, SearchPage};
use async_trait::async_trait;
use std::collections::HashMap;

/// Fixed catalog answering searches from memory
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    books: Vec<BookSummary>,
    details: HashMap<String, BookDetails>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book to the catalog
    pub fn with_book(mut self, book: BookSummary) -> Self {
        self.books.push(book);
        self
    }

    /// Register extended metadata for a work key
    pub fn with_details(mut self, work_key: impl Into<String>, details: BookDetails) -> Self {
        self.details.insert(work_key.into(), details);
        self
    }

    fn matches(book: &BookSummary, filters: &SearchFilters) -> bool {
        if let Some(year) = &filters.year_exact {
            return book.year.map(|y| y.to_string()).as_deref() == Some(year.as_str());
        }

        let needle = filters.text.to_lowercase();
        book.title.to_lowercase().contains(&needle)
            || book
                .authors
                .iter()
                .any(|a| a.to_lowercase().contains(&needle))
    }
}

#[async_trait]
impl BookSource for MemorySource {
    async fn search(
        &self,
        filters: &SearchFilters,
        page: u32,
        page_size: u32,
    ) -> SourceResult<SearchPage> {
        let hits: Vec<&BookSummary> = self
            .books
            .iter()
            .filter(|book| Self::matches(book, filters))
            .collect();

        let start = (page.max(1) as usize - 1) * page_size as usize;
        let books = hits
            .iter()
            .skip(start)
            .take(page_size as usize)
            .map(|book| (*book).clone())
            .collect();

        Ok(SearchPage::new(books, hits.len() as u64))
    }

    async fn fetch_details(&self, work_key: &str) -> Option<BookDetails> {
        self.details.get(work_key).cloned()
    }
}
