//! Interactive browse command

use super::{samples, SAMPLE_QUERIES};
use crate::render;
use anyhow::{Context, Result};
use bookfinder_core::{ClientConfig, OpenLibraryClient, SearchOrchestrator};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// A line typed at the browse prompt
#[derive(Debug, PartialEq)]
enum Action {
    Search(String),
    Sample(usize),
    Next,
    Previous,
    GoTo(u32),
    Details(usize),
    Back,
    Help,
    Quit,
    Invalid(String),
    Nothing,
}

impl Action {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Action::Nothing;
        }
        let Some(command) = line.strip_prefix(':') else {
            return Action::Search(line.to_string());
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::parse::<u32>);

        match (name, arg) {
            ("n", None) => Action::Next,
            ("p", None) => Action::Previous,
            ("b", None) => Action::Back,
            ("h", None) => Action::Help,
            ("q", None) => Action::Quit,
            ("g", Some(Ok(page))) => Action::GoTo(page),
            ("d", Some(Ok(n))) if n >= 1 => Action::Details(n as usize),
            ("s", Some(Ok(n))) if n >= 1 => Action::Sample(n as usize),
            _ => Action::Invalid(line.to_string()),
        }
    }
}

fn print_help() {
    println!("Type a title, author or year to search.");
    println!("  :n / :p   next / previous page");
    println!("  :g N      go to page N");
    println!("  :d N      details for result N");
    println!("  :s N      run sample query N");
    println!("  :b        back to start");
    println!("  :h        this help");
    println!("  :q        quit");
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

/// Read commands from stdin until `:q` or end of input
pub async fn browse(config: ClientConfig) -> Result<()> {
    let client = OpenLibraryClient::new(config).context("Failed to create HTTP client")?;
    let orchestrator = SearchOrchestrator::new(Arc::new(client));
    let mut updates = orchestrator.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_help();
    println!();
    samples();

    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Action::parse(&line) {
            Action::Search(query) => run_search(&orchestrator, &query).await?,
            Action::Sample(n) => match SAMPLE_QUERIES.get(n - 1) {
                Some(query) => run_search(&orchestrator, query).await?,
                None => println!("There are {} sample queries", SAMPLE_QUERIES.len()),
            },
            Action::Next => orchestrator.next_page().await,
            Action::Previous => orchestrator.previous_page().await,
            Action::GoTo(page) => orchestrator.go_to_page(page).await,
            Action::Details(n) => show_details(&orchestrator, n).await?,
            Action::Back => {
                orchestrator.reset_search();
                samples();
            }
            Action::Help => print_help(),
            Action::Quit => break,
            Action::Invalid(input) => println!("Unknown command {:?}, type :h for help", input),
            Action::Nothing => {}
        }

        if updates.has_changed().unwrap_or(false) {
            let state = updates.borrow_and_update().clone();
            if state.search_performed && !state.loading {
                render::print_results(&state);
            }
        }
    }

    Ok(())
}

async fn run_search(orchestrator: &SearchOrchestrator, query: &str) -> Result<()> {
    let pb = render::spinner(format!("Searching for \"{}\"...", query.trim()))?;
    orchestrator.perform_search(query, 1).await;
    pb.finish_and_clear();
    Ok(())
}

async fn show_details(orchestrator: &SearchOrchestrator, n: usize) -> Result<()> {
    let state = orchestrator.state();
    let Some(book) = state.books.get(n - 1) else {
        println!("No result {} on this page", n);
        return Ok(());
    };

    let pb = render::spinner(format!("Fetching {}...", book.id))?;
    let details = orchestrator.source().fetch_details(&book.id).await;
    pb.finish_and_clear();

    print!("{}", render::format_card(n, book));
    match details {
        Some(details) => render::print_details(&details),
        None => println!("No details available for {}", book.id),
    }
    Ok(())
}
