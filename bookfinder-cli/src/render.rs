//! Terminal rendering of search state

use anyhow::Result;
use bookfinder_core::{BookDetails, BookSummary, SearchState};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const UNKNOWN: &str = "Unknown";

/// Animated spinner on stderr; hidden when stderr is not a terminal
pub fn spinner(message: String) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    Ok(pb)
}

/// One result card
pub fn format_card(position: usize, book: &BookSummary) -> String {
    let author = book.primary_author().unwrap_or(UNKNOWN);
    let year = book
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let mut card = format!("{:>3}. {}\n     by {} ({})\n", position, book.title, author, year);
    if !book.subjects.is_empty() {
        card.push_str(&format!("     {}\n", book.subjects.join(", ")));
    }
    if let Some(cover) = &book.cover_url {
        card.push_str(&format!("     Cover: {}\n", cover));
    }
    card.push_str(&format!("     More:  {}\n", book.web_search_url()));
    card
}

/// Count line, cards and page footer
pub fn print_results(state: &SearchState) {
    match state.result_summary() {
        Some(summary) => println!("{}\n", summary),
        None => {
            println!("No books found for \"{}\"", state.query);
            return;
        }
    }

    for (i, book) in state.books.iter().enumerate() {
        println!("{}", format_card(i + 1, book));
    }
    println!("Page {} of {}", state.page, state.page_count());
}

pub fn print_details(details: &BookDetails) {
    println!("Title:       {}", details.title);
    if let Some(desc) = &details.description {
        println!("Description: {}", desc);
    }
    if !details.subjects.is_empty() {
        println!("Subjects:    {}", details.subjects.join(", "));
    }
}
