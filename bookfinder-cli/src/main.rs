//! Bookfinder CLI - Search the Open Library catalog from the terminal

mod commands;
mod render;

use anyhow::{Context, Result};
use bookfinder_core::ClientConfig;
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate a page number (must be at least 1)
fn parse_page(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| format!("'{}' is not a valid page number", s))?;
    if n < 1 {
        Err("page must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

/// Parse and validate a timeout in seconds (must be at least 1)
fn parse_timeout(s: &str) -> Result<u64, String> {
    let n: u64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("timeout must be at least 1 second".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "bookfinder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Search API base URL (overrides BOOKFINDER_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Cover image host (overrides BOOKFINDER_COVERS_URL)
    #[arg(long, global = true)]
    covers_url: Option<String>,

    /// Request timeout in seconds (overrides BOOKFINDER_TIMEOUT_SECS)
    #[arg(long, global = true, value_parser = parse_timeout)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search books by title, author or year
    Search {
        /// Search text; exactly four digits searches by publication year
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Result page (1-indexed)
        #[arg(short, long, default_value = "1", value_parser = parse_page)]
        page: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the description and subjects of a work
    Details {
        /// Work key, e.g. /works/OL45804W or OL45804W
        work_key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive search session with paging
    Browse,

    /// List sample queries to try
    Samples,
}

impl Cli {
    /// Environment configuration with command-line overrides applied
    fn client_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::from_env().context("Invalid environment configuration")?;

        if let Some(url) = &self.api_url {
            config = config.with_base_url(url.as_str());
        }
        if let Some(url) = &self.covers_url {
            config = config.with_covers_url(url.as_str());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookfinder_cli=debug,bookfinder_core=debug"
    } else {
        "bookfinder_cli=info,bookfinder_core=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.client_config()?;
    tracing::debug!("Using catalog at {}", config.base_url);

    match cli.command {
        Commands::Search { query, page, json } => {
            commands::search(config, &query.join(" "), page, json).await
        }

        Commands::Details { work_key, json } => commands::details(config, &work_key, json).await,

        Commands::Browse => commands::browse(config).await,

        Commands::Samples => {
            commands::samples();
            Ok(())
        }
    }
}
