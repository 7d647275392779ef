//! Core types shared by the search client and the orchestrator

mod book;
mod cover;
mod details;
mod filters;
mod page;

pub use book::BookSummary;
pub use cover::{cover_url, CoverSize};
pub use details::BookDetails;
pub use filters::SearchFilters;
pub use page::SearchPage;
