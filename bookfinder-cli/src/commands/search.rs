//! Search command implementation

use crate::render;
use anyhow::{Context, Result};
use bookfinder_core::{ClientConfig, OpenLibraryClient, SearchOrchestrator};
use std::sync::Arc;

/// Run one search and print the requested page
pub async fn search(config: ClientConfig, query: &str, page: u32, json: bool) -> Result<()> {
    let client = OpenLibraryClient::new(config).context("Failed to create HTTP client")?;
    let orchestrator = SearchOrchestrator::new(Arc::new(client));

    let pb = render::spinner(format!("Searching for \"{}\"...", query.trim()))?;
    orchestrator.perform_search(query, page).await;
    pb.finish_and_clear();

    let state = orchestrator.state();
    if !state.search_performed {
        println!("Nothing to search for");
        return Ok(());
    }

    tracing::debug!(
        "Search for {:?} returned {} of {} books",
        state.query,
        state.books.len(),
        state.total_results
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        render::print_results(&state);
    }

    Ok(())
}
