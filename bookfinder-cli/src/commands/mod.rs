//! CLI command implementations

mod browse;
mod details;
mod samples;
mod search;

pub use browse::browse;
pub use details::details;
pub use samples::{samples, SAMPLE_QUERIES};
pub use search::search;
