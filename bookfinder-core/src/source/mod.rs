//! Book sources the orchestrator can search

mod memory;
mod open_library;

pub use memory::MemorySource;
pub use open_library::{parse_search_page, OpenLibraryClient};

use crate::error::RemoteError;
use crate::types::{BookDetails, SearchFilters, SearchPage};
use async_trait::async_trait;

/// Result type for source operations
pub type SourceResult<T> = std::result::Result<T, RemoteError>;

/// Abstract book catalog
///
/// Implementations that degrade failures to empty pages return `Ok` from
/// [`BookSource::search`]. An `Err` is still tolerated by the orchestrator,
/// which then keeps its previous results.
#[async_trait]
pub trait BookSource: Send + Sync {
    /// Search one page of the catalog
    async fn search(
        &self,
        filters: &SearchFilters,
        page: u32,
        page_size: u32,
    ) -> SourceResult<SearchPage>;

    /// Extended metadata for a work, or `None` when unavailable
    async fn fetch_details(&self, work_key: &str) -> Option<BookDetails>;
}
