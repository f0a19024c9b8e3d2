//! # Bible API Client
//!
//! Typed, read-only access to the Bible HTTP API. Every method is a single
//! GET round trip: no retries, no caching, no timeouts beyond what reqwest
//! applies by default. Failures from the transport, non-2xx statuses and
//! undecodable bodies are handed back as they come.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::{FullBookChapter, SearchResult, TextEnvelope};

/// Query parameters for a single request
type QueryParams<'a> = [(&'a str, String)];

/// Stateless client for the Bible API
///
/// The base URL is parsed once at construction. The client is cheap to clone
/// and every method takes `&self`, so any number of calls may be in flight on
/// the same instance.
#[derive(Debug, Clone)]
pub struct BibleApiClient {
    base_url: Url,
    http: Client,
}

impl BibleApiClient {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder().build()?;
        Self::with_http_client(base_url, http)
    }

    /// Create a client from resolved configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        tracing::debug!(
            "Creating BibleApiClient for {} ({})",
            config.api_base,
            config.source
        );
        Self::new(&config.api_base)
    }

    /// Create a client that sends requests through an existing reqwest client
    pub fn with_http_client(base_url: &str, http: Client) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|source| Error::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        if parsed.cannot_be_a_base() {
            return Err(Error::BaseUrlCannotBeABase {
                url: base_url.to_string(),
            });
        }

        Ok(Self {
            base_url: parsed,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// List all book names, in server order
    pub async fn list_books(&self) -> Result<Vec<String>> {
        self.get_json(&["books"], &[]).await
    }

    /// List the chapter numbers of `book`
    pub async fn list_chapters(&self, book: &str) -> Result<Vec<u32>> {
        self.get_json(&["chapters"], &[("book", book.to_string())]).await
    }

    /// List the verse numbers of one chapter
    pub async fn list_verses(&self, book: &str, chapter: u32) -> Result<Vec<u32>> {
        self.get_json(
            &["verses"],
            &[("book", book.to_string()), ("chapter", chapter.to_string())],
        )
        .await
    }

    /// Fetch the text of a single verse
    ///
    /// The endpoint answers with a `{ "text": ... }` envelope; only the text is
    /// returned.
    pub async fn get_verse_text(&self, book: &str, chapter: u32, verse: u32) -> Result<String> {
        let envelope: TextEnvelope = self
            .get_json(
                &["verse"],
                &[
                    ("book", book.to_string()),
                    ("chapter", chapter.to_string()),
                    ("verse", verse.to_string()),
                ],
            )
            .await?;
        Ok(envelope.text)
    }

    /// Search verse text for `keyword`
    ///
    /// The raw body must be a JSON array. Each entry is projected onto
    /// `book`, `chapter`, `verse` and `text`, keeping the server's order; any
    /// other fields are dropped. A non-array body or an entry missing one of
    /// those fields fails the whole call.
    pub async fn keyword_search(&self, keyword: &str) -> Result<Vec<SearchResult>> {
        let raw: Value = self
            .get_json(&["search"], &[("keyword", keyword.to_string())])
            .await?;

        let entries = match raw {
            Value::Array(entries) => entries,
            other => {
                return Err(Error::UnexpectedShape {
                    endpoint: "/search",
                    expected: "array",
                    found: json_kind(&other),
                })
            }
        };

        entries
            .into_iter()
            .map(|entry| serde_json::from_value(entry).map_err(Error::from))
            .collect()
    }

    /// Fetch every chapter and verse of `book`
    ///
    /// The book name becomes a percent-encoded path segment:
    /// `/books/{book}/all`.
    pub async fn fetch_full_book(&self, book: &str) -> Result<Vec<FullBookChapter>> {
        self.get_json(&["books", book, "all"], &[]).await
    }

    /// Build the URL for `segments` below the base URL's path
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot-be-a-base URLs are rejected at construction
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &QueryParams<'_>,
    ) -> Result<T> {
        let url = self.endpoint(segments);
        tracing::debug!("GET {url} {query:?}");

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        tracing::trace!("Response status {}", response.status());
        Ok(response.json::<T>().await?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
