//! Search filters derived from user input

use serde::{Deserialize, Serialize};

/// Query parameters sent to the search endpoint
///
/// A query of exactly four ASCII digits is always read as a publication
/// year. There is no fallback to a title search for such input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFilters {
    /// Trimmed, non-empty free text
    pub text: String,

    /// Exact first-publication year, set only for 4-digit queries
    pub year_exact: Option<String>,
}

impl SearchFilters {
    /// Build filters from raw input
    ///
    /// Returns `None` when the input is empty after trimming.
    pub fn from_query(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let year_exact = is_year(text).then(|| text.to_string());
        Some(Self {
            text: text.to_string(),
            year_exact,
        })
    }

    /// Request parameters for the given page
    pub fn query_params(&self, page: u32, limit: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", self.text.clone())];
        if let Some(year) = &self.year_exact {
            params.push(("first_publish_year", year.clone()));
        }
        params.push(("page", page.to_string()));
        params.push(("limit", limit.to_string()));
        params
    }
}

/// Whether the text is exactly four ASCII digits
pub(crate) fn is_year(text: &str) -> bool {
    text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit())
}
