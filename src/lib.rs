//! News ingestion and normalization.
//!
//! Two structurally parallel pipelines turn heterogeneous upstreams into one
//! flat article shape:
//!
//! - [`news`] - keyword/category search against a JSON API with a status
//!   envelope
//! - [`feed`] - arbitrary RSS feeds fetched as raw text and mined for items
//!   without an XML parser, tolerant of the malformed documents real feeds
//!   serve
//!
//! [`format`] renders either shape as a fixed-width text listing. Each
//! pipeline is a pure function of its input plus one network round trip: no
//! caching, no retries, no shared state between calls, so callers can issue
//! any number of independent calls concurrently.
//!
//! Errors are terminal and propagate unmodified; malformed *content* inside a
//! structurally sound response degrades to empty/placeholder field values
//! instead of raising. Console output, credential sourcing, and exit codes
//! belong to the caller.

pub mod feed;
pub mod format;
pub mod news;
pub mod util;

pub use feed::{fetch_feed, FeedArticle, FeedError};
pub use news::{Category, NewsArticle, NewsClient, NewsError, NewsResult, SearchQuery};
