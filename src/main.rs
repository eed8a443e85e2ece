use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use secrecy::SecretString;
use std::process::ExitCode;
use url::Url;

use newswire::feed::fetch_feed;
use newswire::format::{render_feed_listing, render_news_listing};
use newswire::news::{Category, NewsClient, SearchQuery, DEFAULT_PAGE_SIZE};

/// Built-in feed shortcuts. Resolution lives here in the calling layer; the
/// ingestion core only ever sees the resolved URL.
const DEFAULT_FEEDS: &[(&str, &str)] = &[
    ("bbc-top", "https://feeds.bbci.co.uk/news/rss.xml"),
    ("bbc-world", "https://feeds.bbci.co.uk/news/world/rss.xml"),
    ("bbc-tech", "https://feeds.bbci.co.uk/news/technology/rss.xml"),
    ("nyt-top", "https://rss.nytimes.com/services/xml/rss/nyt/HomePage.xml"),
    ("nyt-world", "https://rss.nytimes.com/services/xml/rss/nyt/World.xml"),
    ("npr", "https://feeds.npr.org/1001/rss.xml"),
    ("reuters", "https://www.reutersagency.com/feed/?best-topics=tech"),
];

/// Feed used when `newswire feed` is run with no argument.
const DEFAULT_FEED_NAME: &str = "bbc-top";
const DEFAULT_FEED_LABEL: &str = "BBC Top Stories";

#[derive(Parser, Debug)]
#[command(name = "newswire", about = "Search news and read RSS feeds from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search news by keyword, optionally scoped by category and country
    Search(SearchArgs),
    /// Fetch and list an RSS feed by built-in name or URL
    Feed(FeedArgs),
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Search phrase
    query: String,

    /// Category: business, entertainment, general, health, science, sports,
    /// technology
    #[arg(value_parser = parse_category)]
    category: Option<Category>,

    /// 2-letter country code (e.g. us, gb, jp)
    country: Option<String>,

    /// Articles to request and show
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Credential for the search API
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Emit the normalized result as JSON instead of a listing
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct FeedArgs {
    /// Built-in feed name or a feed URL
    reference: Option<String>,

    /// List the built-in feeds and exit
    #[arg(long)]
    feeds: bool,
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse()
}

fn builtin_feed(name: &str) -> Option<&'static str> {
    DEFAULT_FEEDS
        .iter()
        .find(|(feed_name, _)| *feed_name == name)
        .map(|(_, url)| *url)
}

/// Resolves a feed argument to a `(label, url)` pair.
///
/// No argument selects the default feed. Arguments with an `http` prefix are
/// literal URLs, validated and then passed through untouched. Anything else
/// must name a built-in feed; unknown names fail here, before any network
/// activity.
fn resolve_feed(reference: Option<&str>) -> Result<(String, String)> {
    let Some(arg) = reference else {
        let url = builtin_feed(DEFAULT_FEED_NAME)
            .ok_or_else(|| anyhow::anyhow!("default feed missing from the built-in table"))?;
        return Ok((DEFAULT_FEED_LABEL.to_string(), url.to_string()));
    };

    if arg.starts_with("http") {
        Url::parse(arg).with_context(|| format!("Invalid feed URL: {arg}"))?;
        return Ok((arg.to_string(), arg.to_string()));
    }

    match builtin_feed(arg) {
        Some(url) => Ok((arg.to_string(), url.to_string())),
        None => anyhow::bail!("Unknown feed: \"{arg}\". Use --feeds to see available feeds."),
    }
}

/// Runs the search subcommand. Failures are reported here, as the listing
/// error line or the `--json` error object, and surface only through the
/// returned exit code.
async fn run_search(args: SearchArgs) -> Result<ExitCode> {
    let query = SearchQuery {
        query: args.query,
        category: args.category,
        country: args.country,
        page_size: Some(args.page_size),
    };

    if !args.json {
        let mut banner = format!("  Searching: \"{}\"", query.query);
        if let Some(category) = query.category {
            banner.push_str(&format!(" | category: {category}"));
        }
        if let Some(country) = &query.country {
            banner.push_str(&format!(" | country: {country}"));
        }
        println!("\n{banner}\n");
    }

    let outcome = match NewsClient::new(args.api_key.map(SecretString::from)) {
        Ok(client) => client.search(&query).await,
        Err(e) => Err(e),
    };

    if args.json {
        return match outcome {
            Ok(result) => {
                println!("{}", serde_json::to_string_pretty(&result)?);
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
                Ok(ExitCode::FAILURE)
            }
        };
    }

    match outcome {
        Ok(result) => {
            println!("{}", render_news_listing(&result));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("  Error: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Runs the feed subcommand. Unresolvable references propagate as errors;
/// fetch failures are reported here and surface through the returned exit
/// code.
async fn run_feed(args: FeedArgs) -> Result<ExitCode> {
    if args.feeds {
        println!("Built-in feeds:");
        for (name, url) in DEFAULT_FEEDS {
            println!("  {name:<12} {url}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let (label, url) = resolve_feed(args.reference.as_deref())?;
    println!("\n  Fetching: {label}\n");

    let client = reqwest::Client::new();
    match fetch_feed(&client, &url).await {
        Ok(articles) => {
            println!("{}", render_feed_listing(&articles));
            println!("\n  Total: {} articles\n", articles.len());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("  Error: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Search(args) => run_search(args).await,
        Command::Feed(args) => run_feed(args).await,
    }
}
