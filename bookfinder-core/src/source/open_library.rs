//! Open Library search client

use super::{BookSource, SourceResult};
use crate::config::ClientConfig;
use crate::types::{cover_url, BookDetails, BookSummary, CoverSize, SearchFilters, SearchPage};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Raw response of `/search.json`
#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    #[serde(default)]
    docs: Vec<RawDoc>,

    #[serde(rename = "numFound")]
    num_found: Option<u64>,
}

/// One document in a search response
#[derive(Debug, Deserialize)]
struct RawDoc {
    key: String,
    title: Option<String>,
    author_name: Option<Vec<String>>,
    first_publish_year: Option<i32>,
    cover_i: Option<i64>,
    subject: Option<Vec<String>>,
}

impl RawDoc {
    fn into_summary(self, covers_url: &str) -> BookSummary {
        BookSummary {
            id: self.key,
            title: self.title.unwrap_or_default(),
            authors: self.author_name.unwrap_or_default(),
            year: self.first_publish_year,
            cover_url: self
                .cover_i
                .filter(|id| *id > 0)
                .map(|id| cover_url(covers_url, id, CoverSize::Medium)),
            subjects: Vec::new(),
        }
        .with_subjects(self.subject.unwrap_or_default())
    }
}

/// Raw response of `/works/<id>.json`
#[derive(Debug, Deserialize)]
struct RawWork {
    title: Option<String>,
    description: Option<Value>,
    subjects: Option<Vec<String>>,
}

impl From<RawWork> for BookDetails {
    fn from(raw: RawWork) -> Self {
        Self {
            title: raw.title.unwrap_or_default(),
            description: raw.description.and_then(normalize_description),
            subjects: raw.subjects.unwrap_or_default(),
        }
    }
}

/// Descriptions come either as a plain string or as `{ "type": ..., "value": ... }`
fn normalize_description(raw: Value) -> Option<String> {
    match raw {
        Value::String(text) => Some(text),
        Value::Object(mut map) => match map.remove("value") {
            Some(Value::String(text)) => Some(text),
            _ => None,
        },
        _ => None,
    }
}

/// Accept both "/works/OL45804W" and a bare "OL45804W"
fn normalize_work_key(work_key: &str) -> String {
    let key = work_key.trim();
    if key.starts_with('/') {
        key.to_string()
    } else {
        format!("/works/{}", key)
    }
}

/// Parse a `/search.json` body into a page of summaries
pub fn parse_search_page(body: &[u8], covers_url: &str) -> SourceResult<SearchPage> {
    let raw: RawSearchResponse = serde_json::from_slice(body)?;
    let books = raw
        .docs
        .into_iter()
        .map(|doc| doc.into_summary(covers_url))
        .collect();
    Ok(SearchPage::new(books, raw.num_found.unwrap_or(0)))
}

/// Client for the Open Library search and works endpoints
///
/// [`BookSource::search`] and [`BookSource::fetch_details`] never fail:
/// a timeout, transport error, bad status or malformed body is logged and
/// reported as an empty page or `None`. Use [`OpenLibraryClient::try_search`]
/// and [`OpenLibraryClient::try_fetch_details`] to see the error instead.
#[derive(Debug, Clone)]
pub struct OpenLibraryClient {
    client: Client,
    config: ClientConfig,
}

impl OpenLibraryClient {
    /// Create a client; every request is bounded by `config.timeout`
    pub fn new(config: ClientConfig) -> SourceResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a client configured from `BOOKFINDER_*` environment variables
    pub fn from_env() -> crate::Result<Self> {
        let config = ClientConfig::from_env()?;
        Ok(Self::new(config)?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search one page, reporting failures
    pub async fn try_search(
        &self,
        filters: &SearchFilters,
        page: u32,
        page_size: u32,
    ) -> SourceResult<SearchPage> {
        let url = format!("{}/search.json", self.config.base_url);
        debug!("GET {} q={:?} page={}", url, filters.text, page);

        let body = self
            .client
            .get(&url)
            .query(&filters.query_params(page, page_size))
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        parse_search_page(&body, &self.config.covers_url)
    }

    /// Fetch extended metadata for a work, reporting failures
    pub async fn try_fetch_details(&self, work_key: &str) -> SourceResult<BookDetails> {
        let url = format!(
            "{}{}.json",
            self.config.base_url,
            normalize_work_key(work_key)
        );
        debug!("GET {}", url);

        let raw: RawWork = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(raw.into())
    }
}

#[async_trait]
impl BookSource for OpenLibraryClient {
    async fn search(
        &self,
        filters: &SearchFilters,
        page: u32,
        page_size: u32,
    ) -> SourceResult<SearchPage> {
        match self.try_search(filters, page, page_size).await {
            Ok(page) => Ok(page),
            Err(e) => {
                warn!("Error fetching search results for {:?}: {}", filters.text, e);
                Ok(SearchPage::empty())
            }
        }
    }

    async fn fetch_details(&self, work_key: &str) -> Option<BookDetails> {
        match self.try_fetch_details(work_key).await {
            Ok(details) => Some(details),
            Err(e) => {
                warn!("Error fetching book details for {}: {}", work_key, e);
                None
            }
        }
    }
}
