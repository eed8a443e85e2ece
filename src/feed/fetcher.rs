use crate::feed::parser::{extract_tag, split_items, strip_html};
use thiserror::Error;

/// Tag names pulled from each item fragment.
const TAG_TITLE: &str = "title";
const TAG_LINK: &str = "link";
const TAG_DESCRIPTION: &str = "description";
const TAG_PUB_DATE: &str = "pubDate";

/// Errors from feed retrieval.
///
/// Both variants are terminal: the fetch is a single attempt with no retry,
/// and the caller decides what to surface.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network-level error (DNS, connection, TLS) or body read failure
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with a non-2xx status code
    #[error("Failed to fetch RSS: {status} {status_text}")]
    HttpStatus { status: u16, status_text: String },
}

/// One normalized feed item.
///
/// Every field is a plain string and never absent: a missing tag degrades to
/// `""` rather than failing the item. `title` and `description` are
/// HTML-stripped; `link` and `pub_date` carry the raw tag content. `source`
/// is identical across all items of one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedArticle {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: String,
    pub source: String,
}

/// Fetches a feed document and extracts its items.
///
/// Issues exactly one GET for `url` and reads the body as text. The channel
/// title (first `<title>` anywhere in the document, CDATA-aware) becomes each
/// item's `source`, falling back to the feed URL when no title is
/// extractable. The document is then split on `<item>` delimiters and each
/// fragment mapped to a [`FeedArticle`].
///
/// A document that yields no items returns an empty list, not an error.
///
/// # Errors
///
/// - [`FeedError::HttpStatus`] for a non-2xx response
/// - [`FeedError::Network`] for connection or body-read failures
pub async fn fetch_feed(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<FeedArticle>, FeedError> {
    tracing::debug!(feed = %url, "Fetching feed document");

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::HttpStatus {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
        });
    }

    let document = response.text().await?;

    // Channel title lookup runs over the whole document, before item
    // segmentation. An empty result means the URL doubles as the source name.
    let channel_title = extract_tag(&document, TAG_TITLE);
    let source = if channel_title.is_empty() {
        url
    } else {
        channel_title
    };

    let articles: Vec<FeedArticle> = split_items(&document)
        .map(|item| FeedArticle {
            title: strip_html(extract_tag(item, TAG_TITLE)).into_owned(),
            link: extract_tag(item, TAG_LINK).to_string(),
            description: strip_html(extract_tag(item, TAG_DESCRIPTION)).into_owned(),
            pub_date: extract_tag(item, TAG_PUB_DATE).to_string(),
            source: source.to_string(),
        })
        .collect();

    tracing::debug!(feed = %url, items = articles.len(), "Feed document parsed");

    Ok(articles)
}
