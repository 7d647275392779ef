//! Bookfinder Core Library
//!
//! This crate provides the types, the remote search client and the search
//! orchestrator behind the Bookfinder book search client. Raw user input is
//! turned into Open Library filters, results are mapped into [`BookSummary`]
//! records, and the current query, page and result set live in a single
//! [`SearchState`] owned by the [`SearchOrchestrator`].

pub mod config;
pub mod error;
pub mod search;
pub mod source;
pub mod types;

pub use config::ClientConfig;
pub use error::{BookFinderError, ConfigError, RemoteError, Result};
pub use search::{SearchOrchestrator, SearchState, PAGE_SIZE};
pub use source::{BookSource, MemorySource, OpenLibraryClient};
pub use types::{cover_url, BookDetails, BookSummary, CoverSize, SearchFilters, SearchPage};
