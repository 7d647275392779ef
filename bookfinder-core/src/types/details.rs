//! Extended metadata for a single work

use serde::{Deserialize, Serialize};

/// Title, description and full subject list of a work
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookDetails {
    pub title: String,

    /// Plain-text description, if the catalog has one
    pub description: Option<String>,

    pub subjects: Vec<String>,
}
