mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ugcposts::{PageBound, ReviewsClient, SortOrder};

#[derive(Debug, Parser)]
#[command(name = "ugcposts-cli")]
#[command(about = "Scrape Google Maps reviews for a resolved place URL")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch reviews for a place and emit them as JSON.
    Scrape {
        /// Resolved place page URL (https://www.google.com/maps/place/...).
        #[arg(long)]
        url: String,

        /// Sort order: relevance, newest, highest-rating, or lowest-rating.
        #[arg(long, default_value = "relevance")]
        sort: String,

        /// Page bound: "max" or a positive integer.
        #[arg(long, default_value = "max")]
        pages: String,

        /// Optional text filter applied by the endpoint.
        #[arg(long, default_value = "")]
        query: String,

        /// Emit the raw positional records instead of decoded reviews.
        #[arg(long)]
        raw: bool,

        /// Write output to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape {
            url,
            sort,
            pages,
            query,
            raw,
            out,
        } => scrape(&url, &sort, &pages, &query, raw, out).await,
    }
}

async fn scrape(
    url: &str,
    sort: &str,
    pages: &str,
    query: &str,
    raw: bool,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    // All string-level validation happens before the client is built, so a
    // bad invocation never touches the network.
    let sort: SortOrder = sort.parse()?;
    let bound: PageBound = pages.parse()?;
    ugcposts::validate::validate_place_url(url)?;

    let config = config::load_config()?;
    let client = ReviewsClient::new(config.request_timeout_secs, &config.user_agent)?;

    let json = if raw {
        let records = client.fetch_all_raw(url, sort, bound, query).await?;
        serde_json::to_string_pretty(&records)?
    } else {
        let reviews = client.fetch_all_reviews(url, sort, bound, query).await?;
        tracing::info!(count = reviews.len(), "scrape complete");
        serde_json::to_string_pretty(&reviews)?
    };

    match out {
        Some(path) => std::fs::write(&path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
