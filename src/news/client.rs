use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Production endpoint root for the search API.
const NEWS_API_BASE: &str = "https://newsapi.org/v2";

/// Articles returned per request when the caller does not say otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Envelope status value that marks a successful response.
const STATUS_OK: &str = "ok";

/// Errors from the search client.
///
/// All variants are terminal; the client never retries. Missing-field
/// degradation inside a well-formed envelope is not an error.
#[derive(Debug, Error)]
pub enum NewsError {
    /// API credential missing at construction
    #[error("NEWS_API_KEY is not set")]
    MissingCredential,
    /// Upstream answered with a non-success status envelope
    #[error("NewsAPI error: {0}")]
    Upstream(String),
    /// Network-level failure or body read error
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Response body was not valid JSON
    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Search categories accepted by the region-scoped endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Business,
    Entertainment,
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    /// Lowercase name as the upstream API spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "business" => Ok(Category::Business),
            "entertainment" => Ok(Category::Entertainment),
            "general" => Ok(Category::General),
            "health" => Ok(Category::Health),
            "science" => Ok(Category::Science),
            "sports" => Ok(Category::Sports),
            "technology" => Ok(Category::Technology),
            other => Err(format!(
                "unknown category '{other}' (expected one of: business, entertainment, \
                 general, health, science, sports, technology)"
            )),
        }
    }
}

/// Input to [`NewsClient::search`].
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Free-text search phrase; required and non-empty
    pub query: String,
    /// Restricts to a category; routes to the region-scoped endpoint
    pub category: Option<Category>,
    /// 2-letter country code; routes to the region-scoped endpoint
    pub country: Option<String>,
    /// Articles per request; [`DEFAULT_PAGE_SIZE`] when `None`
    pub page_size: Option<usize>,
}

impl SearchQuery {
    /// A plain keyword query with defaults for everything else.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: None,
            country: None,
            page_size: None,
        }
    }
}

/// One normalized search result entry.
///
/// Serializes with the upstream camelCase field names so JSON output matches
/// the wire shape consumers already handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: String,
    /// Provider display name; never empty (defaults to "Unknown")
    pub source: String,
    pub author: Option<String>,
}

/// Outcome of one search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResult {
    /// The query text as submitted
    pub query: String,
    /// Upstream's total match count, which may far exceed `articles.len()`
    pub total_results: u64,
    pub articles: Vec<NewsArticle>,
}

// Wire types for the upstream envelope. Everything defaults so that a
// well-formed envelope with absent fields degrades instead of failing.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    total_results: u64,
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: String,
    #[serde(default)]
    url_to_image: Option<String>,
    #[serde(default)]
    published_at: String,
    #[serde(default)]
    source: Option<RawSource>,
    #[serde(default)]
    author: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    #[serde(default)]
    name: Option<String>,
}

/// Client for the keyword/category search API.
///
/// The credential is injected at construction rather than read from ambient
/// process state, so tests can supply a fake key and a local base URL.
/// `Debug` output keeps the key redacted.
#[derive(Debug)]
pub struct NewsClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl NewsClient {
    /// Creates a client against the production endpoint.
    ///
    /// # Errors
    ///
    /// [`NewsError::MissingCredential`] when `api_key` is `None`. This is the
    /// fatal precondition of the whole pipeline; callers should not retry.
    pub fn new(api_key: Option<SecretString>) -> Result<Self, NewsError> {
        Self::with_base_url(api_key, NEWS_API_BASE)
    }

    /// Creates a client against a custom endpoint root (no trailing slash).
    ///
    /// Used to point the client at a local server; production callers want
    /// [`NewsClient::new`].
    pub fn with_base_url(
        api_key: Option<SecretString>,
        base_url: impl Into<String>,
    ) -> Result<Self, NewsError> {
        let api_key = api_key.ok_or(NewsError::MissingCredential)?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.into(),
        })
    }

    /// Runs one search and normalizes the response.
    ///
    /// Endpoint selection is a hard branch: any `category` or `country`
    /// targets `/top-headlines`, otherwise `/everything`. The two have
    /// different upstream semantics and are not interchangeable. A `category`
    /// without a `country` sends `country=us`, which the region-scoped
    /// endpoint requires.
    ///
    /// The raw article array is capped at the requested page size even when
    /// upstream returns more; order is upstream order.
    ///
    /// # Errors
    ///
    /// - [`NewsError::Upstream`] when the envelope status is not `"ok"`,
    ///   carrying the upstream message when one was supplied
    /// - [`NewsError::Network`] / [`NewsError::Json`] for transport and
    ///   body-parse failures
    pub async fn search(&self, query: &SearchQuery) -> Result<NewsResult, NewsError> {
        let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        let scoped = query.category.is_some() || query.country.is_some();
        let endpoint = if scoped {
            format!("{}/top-headlines", self.base_url)
        } else {
            format!("{}/everything", self.base_url)
        };

        let mut params: Vec<(&str, String)> = vec![
            ("apiKey", self.api_key.expose_secret().to_string()),
            ("q", query.query.clone()),
            ("pageSize", page_size.to_string()),
        ];
        if let Some(category) = query.category {
            params.push(("category", category.as_str().to_string()));
        }
        if let Some(country) = &query.country {
            params.push(("country", country.clone()));
        }
        // Observed upstream quirk: the category endpoint needs a country even
        // when the caller gave none.
        if query.category.is_some() && query.country.is_none() {
            params.push(("country", "us".to_string()));
        }

        tracing::debug!(
            endpoint = %endpoint,
            query = %query.query,
            page_size = page_size,
            "Issuing search request"
        );

        let response = self.client.get(&endpoint).query(&params).send().await?;
        let body = response.text().await?;
        let envelope: Envelope = serde_json::from_str(&body)?;

        if envelope.status != STATUS_OK {
            return Err(NewsError::Upstream(
                envelope
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        // pageSize upstream is advisory; cap locally so the length invariant
        // holds no matter what came back.
        let articles: Vec<NewsArticle> = envelope
            .articles
            .into_iter()
            .take(page_size)
            .map(|raw| NewsArticle {
                title: raw.title,
                description: raw.description,
                url: raw.url,
                url_to_image: raw.url_to_image,
                published_at: raw.published_at,
                source: raw
                    .source
                    .and_then(|s| s.name)
                    .unwrap_or_else(|| "Unknown".to_string()),
                author: raw.author,
            })
            .collect();

        tracing::debug!(
            total = envelope.total_results,
            shown = articles.len(),
            "Search response normalized"
        );

        Ok(NewsResult {
            query: query.query.clone(),
            total_results: envelope.total_results,
            articles,
        })
    }
}
