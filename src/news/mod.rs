//! Search source pipeline: keyword/category queries against a JSON news API.
//!
//! The shape here is the structural twin of [`crate::feed`]: one request, one
//! validation step, one mapping into a normalized record list. The difference
//! is that the upstream speaks well-formed JSON with a status envelope, so
//! validation means checking that envelope rather than tolerating broken
//! markup.
//!
//! [`NewsClient`] holds the API credential (injected, never read from the
//! environment by the client itself) and an endpoint root that tests can
//! repoint at a local server.

mod client;

pub use client::{
    Category, NewsArticle, NewsClient, NewsError, NewsResult, SearchQuery, DEFAULT_PAGE_SIZE,
};
