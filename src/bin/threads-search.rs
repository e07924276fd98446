//! One-shot query CLI.
//!
//! Fetches posts for a username and/or a set of keywords and prints them
//! to stdout as a pretty JSON array, so other processes can shell out to
//! it. With nothing to query it prints an empty array and exits cleanly;
//! on failure it prints an error object to stderr, an empty array to
//! stdout, and exits non-zero.

use clap::Parser;
use threads_scraper::{KeywordSearchBuilder, Post, ThreadsClient, UserThreadsBuilder, dedup};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Username to fetch posts from (without the leading `@`).
    #[arg(long, default_value = "")]
    username: String,

    /// Keywords to search for.
    #[arg(long, num_args = 1..)]
    keywords: Vec<String>,

    /// Max number of posts to return overall.
    #[arg(long, default_value_t = 10)]
    limit: usize,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: &Args) -> anyhow::Result<Vec<Post>> {
    let client = ThreadsClient::builder().build()?;
    let mut results = Vec::new();

    if !args.username.is_empty() {
        results.extend(
            UserThreadsBuilder::new(&client, &args.username)
                .limit(args.limit)
                .fetch()
                .await,
        );
    }

    for keyword in &args.keywords {
        results.extend(
            KeywordSearchBuilder::new(&client, keyword)
                .limit(args.limit)
                .fetch()
                .await,
        );
    }

    let mut unique = dedup::dedupe_by_identity(results);
    unique.truncate(args.limit);
    Ok(unique)
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();

    if args.username.is_empty() && args.keywords.is_empty() {
        println!("[]");
        return;
    }

    match run(&args).await {
        Ok(posts) => {
            let body = serde_json::to_string_pretty(&posts).unwrap_or_else(|_| "[]".to_string());
            println!("{body}");
        }
        Err(e) => {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
            println!("[]");
            std::process::exit(1);
        }
    }
}
