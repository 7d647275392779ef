//! Search orchestration: query, pagination and result state

mod orchestrator;
mod state;

pub use orchestrator::SearchOrchestrator;
pub use state::SearchState;

/// Number of results requested per page
pub const PAGE_SIZE: u32 = 20;
