//! Scheduled batch scraper.
//!
//! Fetches every monitored account, tags posts with their category,
//! deduplicates across the whole run and writes the aggregated result as
//! a JSON cache (`latest.json` plus rotated snapshots). Meant to be run
//! from cron or a process manager.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use threads_scraper::{CacheDocument, ThreadsClient, UserThreadsBuilder, cache, dedup};
use tracing::{info, warn};

/// Pause between per-account fetches, a self-imposed rate limit.
const ACCOUNT_PACING: Duration = Duration::from_secs(2);

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// TOML file mapping category names to account lists. Built-in
    /// defaults are used when omitted.
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// Directory that receives `latest.json` and timestamped snapshots.
    #[arg(long, default_value = "data/cache")]
    cache_dir: PathBuf,

    /// Max posts kept per account.
    #[arg(long, default_value_t = 10)]
    limit: usize,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn monitored_accounts(path: Option<&Path>) -> anyhow::Result<BTreeMap<String, Vec<String>>> {
    match path {
        Some(p) => {
            let body = std::fs::read_to_string(p)
                .with_context(|| format!("reading accounts file {}", p.display()))?;
            toml::from_str(&body).context("parsing accounts file")
        }
        None => Ok(default_accounts()),
    }
}

fn default_accounts() -> BTreeMap<String, Vec<String>> {
    let mut map = BTreeMap::new();
    map.insert(
        "taiwan".to_string(),
        ["pttgossiping", "ctinews", "newtalk_news", "twreporter", "pts.news"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    map.insert(
        "news".to_string(),
        ["nytimes", "washingtonpost", "reuters", "apnews"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    map
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let accounts: Vec<(String, String)> = monitored_accounts(args.accounts.as_deref())?
        .into_iter()
        .flat_map(|(category, users)| {
            users
                .into_iter()
                .map(move |user| (category.clone(), user))
        })
        .collect();

    let client = ThreadsClient::builder().build()?;
    info!(accounts = accounts.len(), "starting scheduled scrape");

    let mut all_posts = Vec::new();
    for (i, (category, username)) in accounts.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(ACCOUNT_PACING).await;
        }
        info!(n = i + 1, total = accounts.len(), username = %username, "scraping account");

        let posts: Vec<_> = UserThreadsBuilder::new(&client, username)
            .limit(args.limit)
            .fetch()
            .await
            .into_iter()
            .filter(|post| !post.id.is_empty())
            .map(|mut post| {
                post.category = Some(category.clone());
                post
            })
            .collect();

        if posts.is_empty() {
            warn!(username = %username, "no posts for account");
        } else {
            info!(username = %username, posts = posts.len(), "account scraped");
        }
        all_posts.extend(posts);
    }

    let unique = dedup::dedupe_by_identity(all_posts);
    let doc = CacheDocument::new(unique);
    let path = cache::write_cache(&args.cache_dir, &doc).context("writing cache")?;
    info!(total_posts = doc.total_posts, path = %path.display(), "scrape complete");
    Ok(())
}
