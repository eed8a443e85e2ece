//! Feed source pipeline: fetch an RSS document and normalize its items.
//!
//! This half of the crate handles arbitrary feeds found in the wild, where
//! strict XML validity cannot be assumed:
//!
//! - **Extraction**: Targeted tag search over raw text, CDATA-aware, no XML
//!   parser involved
//! - **Fetching**: One HTTP GET per call, body read as plain text
//! - **Normalization**: Every item becomes a [`FeedArticle`] with all fields
//!   present; missing tags degrade to empty strings
//!
//! # Architecture
//!
//! The module is organized into two submodules:
//!
//! - `parser` - Tag extraction, item segmentation, and markup stripping
//!   over raw document text
//! - `fetcher` - HTTP retrieval and the item-to-article mapping
//!
//! Structural failures (non-2xx status, network errors) surface as
//! [`FeedError`]; malformed content never does.

mod fetcher;
mod parser;

pub use fetcher::{fetch_feed, FeedArticle, FeedError};
pub use parser::{extract_tag, split_items, strip_html};
