//! The on-disk cache document written by the batch scraper.
//!
//! The library core only produces post sequences; turning one into
//! `latest.json` plus a rotated, timestamped snapshot is the batch
//! caller's job. The document shape and the retention rule live here so
//! they stay next to the model they serialize.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::ThreadsError;
use crate::core::models::Post;

/// How many timestamped snapshots are kept on disk.
pub const SNAPSHOTS_KEPT: usize = 10;

/// Cache document consumed by downstream readers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheDocument {
    /// RFC 3339 timestamp of the scrape run, UTC.
    pub scraped_at: String,
    pub total_posts: usize,
    pub posts: Vec<Post>,
}

impl CacheDocument {
    /// Wraps a finished post set with the current time.
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            scraped_at: Utc::now().to_rfc3339(),
            total_posts: posts.len(),
            posts,
        }
    }
}

/// Writes `latest.json` and a `scrape_<timestamp>.json` snapshot under
/// `dir`, creating the directory if needed, then prunes old snapshots
/// down to [`SNAPSHOTS_KEPT`]. Returns the path of `latest.json`.
pub fn write_cache(dir: &Path, doc: &CacheDocument) -> Result<PathBuf, ThreadsError> {
    fs::create_dir_all(dir)?;
    let body = serde_json::to_string_pretty(doc)?;

    let latest = dir.join("latest.json");
    fs::write(&latest, &body)?;

    let stamp = Utc::now().format("%Y%m%d_%H%M%S");
    let snapshot = dir.join(format!("scrape_{stamp}.json"));
    fs::write(&snapshot, &body)?;
    debug!(path = %snapshot.display(), "wrote cache snapshot");

    prune_snapshots(dir, SNAPSHOTS_KEPT)?;
    Ok(latest)
}

/// Deletes the oldest `scrape_*.json` snapshots in `dir` beyond `keep`.
/// Snapshot names embed their timestamp, so lexicographic order is age
/// order.
pub fn prune_snapshots(dir: &Path, keep: usize) -> Result<(), ThreadsError> {
    let mut snapshots: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("scrape_") && name.ends_with(".json"))
        })
        .collect();

    snapshots.sort();
    snapshots.reverse();
    for old in snapshots.into_iter().skip(keep) {
        debug!(path = %old.display(), "pruning old cache snapshot");
        fs::remove_file(old)?;
    }
    Ok(())
}
