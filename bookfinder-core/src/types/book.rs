//! Book summary displayed on a result card

use serde::{Deserialize, Serialize};

/// Maximum number of subjects kept on a summary
pub const MAX_SUBJECTS: usize = 3;

const WEB_SEARCH_URL: &str = "https://www.google.com/search";

/// A single search hit, normalized from the remote document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookSummary {
    /// Stable work key (e.g. "/works/OL45804W")
    pub id: String,

    /// Title as reported by the catalog
    pub title: String,

    /// Author names, possibly empty
    pub authors: Vec<String>,

    /// First publication year
    pub year: Option<i32>,

    /// Medium-size cover image URL
    pub cover_url: Option<String>,

    /// At most three subject tags
    pub subjects: Vec<String>,
}

impl BookSummary {
    /// Create a summary with only the required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: Vec::new(),
            year: None,
            cover_url: None,
            subjects: Vec::new(),
        }
    }

    /// Add an author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }

    /// Set the first publication year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Set subjects, keeping only the first three
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects = subjects
            .into_iter()
            .take(MAX_SUBJECTS)
            .map(Into::into)
            .collect();
        self
    }

    /// Get the primary author (first listed)
    pub fn primary_author(&self) -> Option<&str> {
        self.authors.first().map(|s| s.as_str())
    }

    /// Web search link for the title and its authors
    pub fn web_search_url(&self) -> String {
        let terms = format!("{} {}", self.title, self.authors.join(", "));
        format!("{}?q={}", WEB_SEARCH_URL, urlencoding::encode(terms.trim_end()))
    }
}
