//! Plain-text rendering of normalized article records.
//!
//! Both pipelines share one block layout per record: an index+title line, a
//! metadata line, an optional truncated description, and the URL. Listings
//! join blocks with a blank line; an empty listing renders a single
//! "no results" line instead of an empty block. The search listing adds a
//! trailing totals line; feed listings have no totals concept beyond length.
//!
//! These functions are pure: callers own all console output.

use crate::feed::FeedArticle;
use crate::news::{NewsArticle, NewsResult};
use crate::util::truncate_chars;
use chrono::{DateTime, Local};

/// Longest description rendered before truncation, in characters.
const DESCRIPTION_LIMIT: usize = 200;

/// Placeholder for records whose date is missing or unparseable.
const UNKNOWN_DATE: &str = "Unknown date";

/// Renders a record's date string for display.
///
/// Feed dates are RFC 2822 (`Mon, 06 Sep 2021 12:00:00 GMT`), search dates
/// RFC 3339; both are tried in that order and rendered in local time as e.g.
/// `Sep 6, 2021 12:00 PM`. Anything empty or unparseable renders the literal
/// `Unknown date`; a bad date never fails a record that otherwise displays
/// fine.
pub fn display_date(raw: &str) -> String {
    if raw.is_empty() {
        return UNKNOWN_DATE.to_string();
    }
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|date| {
            date.with_timezone(&Local)
                .format("%b %-d, %Y %-I:%M %p")
                .to_string()
        })
        .unwrap_or_else(|_| UNKNOWN_DATE.to_string())
}

/// Formats one search result entry as a display block.
///
/// `index` is zero-based; the rendered ordinal is one-based. Empty authors
/// and empty descriptions drop their line/segment entirely.
pub fn format_news_article(article: &NewsArticle, index: usize) -> String {
    let mut lines = Vec::with_capacity(4);
    lines.push(format!("  [{}] {}", index + 1, article.title));

    let mut meta = format!(
        "      {} | {}",
        display_date(&article.published_at),
        article.source
    );
    if let Some(author) = article.author.as_deref().filter(|a| !a.is_empty()) {
        meta.push_str(" | ");
        meta.push_str(author);
    }
    lines.push(meta);

    if let Some(description) = article.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!(
            "      {}",
            truncate_chars(description, DESCRIPTION_LIMIT)
        ));
    }

    lines.push(format!("      {}", article.url));
    lines.join("\n")
}

/// Formats one feed item as a display block.
pub fn format_feed_article(article: &FeedArticle, index: usize) -> String {
    let mut lines = Vec::with_capacity(4);
    lines.push(format!("  [{}] {}", index + 1, article.title));
    lines.push(format!(
        "      {} | {}",
        display_date(&article.pub_date),
        article.source
    ));

    if !article.description.is_empty() {
        lines.push(format!(
            "      {}",
            truncate_chars(&article.description, DESCRIPTION_LIMIT)
        ));
    }

    lines.push(format!("      {}", article.link));
    lines.join("\n")
}

/// Renders a full search listing: blocks, blank-line separated, then the
/// totals line reporting upstream count against the number shown.
pub fn render_news_listing(result: &NewsResult) -> String {
    if result.articles.is_empty() {
        return format!("  No articles found for \"{}\".", result.query);
    }

    let blocks: Vec<String> = result
        .articles
        .iter()
        .enumerate()
        .map(|(index, article)| format_news_article(article, index))
        .collect();

    format!(
        "{}\n\n  Total results: {} (showing {})",
        blocks.join("\n\n"),
        result.total_results,
        result.articles.len()
    )
}

/// Renders a full feed listing: blocks, blank-line separated.
pub fn render_feed_listing(articles: &[FeedArticle]) -> String {
    if articles.is_empty() {
        return "  No articles found.".to_string();
    }

    articles
        .iter()
        .enumerate()
        .map(|(index, article)| format_feed_article(article, index))
        .collect::<Vec<_>>()
        .join("\n\n")
}
