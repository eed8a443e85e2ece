//! Utility functions shared across the ingestion pipelines.
//!
//! Currently this is text processing only: character-counted truncation used
//! by the presentation formatter when cutting long descriptions.
//!
//! # Examples
//!
//! ```
//! use newswire::util::truncate_chars;
//!
//! let truncated = truncate_chars("Long article description", 10);
//! assert_eq!(truncated, "Long artic...");
//! ```

mod text;

pub use text::truncate_chars;
