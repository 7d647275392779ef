//! Cover image URLs

use serde::{Deserialize, Serialize};

/// Cover image size served by the covers host
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CoverSize {
    Small,

    /// Used on result cards
    #[default]
    Medium,

    Large,
}

impl CoverSize {
    /// Size suffix used in the image path
    pub fn suffix(self) -> &'static str {
        match self {
            CoverSize::Small => "S",
            CoverSize::Medium => "M",
            CoverSize::Large => "L",
        }
    }
}

/// Build the image URL for a cover identifier
pub fn cover_url(covers_url: &str, cover_id: i64, size: CoverSize) -> String {
    format!("{}/b/id/{}-{}.jpg", covers_url, cover_id, size.suffix())
}
