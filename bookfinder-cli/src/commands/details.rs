//! Details command implementation

use crate::render;
use anyhow::{Context, Result};
use bookfinder_core::{BookSource, ClientConfig, OpenLibraryClient};

/// Display extended metadata for a work
pub async fn details(config: ClientConfig, work_key: &str, json: bool) -> Result<()> {
    let client = OpenLibraryClient::new(config).context("Failed to create HTTP client")?;

    let pb = render::spinner(format!("Fetching {}...", work_key))?;
    let details = client.fetch_details(work_key).await;
    pb.finish_and_clear();

    let details = details.with_context(|| format!("No details available for {}", work_key))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        render::print_details(&details);
    }

    Ok(())
}
