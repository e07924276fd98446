//! The two deduplication passes.
//!
//! Extraction-time dedup runs inside the HTML extractor and collapses the
//! same post surfacing under two embedded copies, with or without an id.
//! Aggregation-time dedup runs in orchestrating callers across whole
//! result sets and trusts nothing but non-empty identifiers. The keys
//! differ on purpose, so the passes stay separate functions. Both keep
//! first-seen order and never re-rank.

use std::collections::HashSet;

use crate::core::models::Post;
use crate::core::raw::RawThreadItem;

/// Length of the text prefix that forms the near-duplicate signature.
pub const TEXT_PREFIX_LEN: usize = 100;

/// Drops raw items whose id, or whose first [`TEXT_PREFIX_LEN`] characters
/// of text, were already seen. Empty ids and empty texts never match
/// anything and are never recorded.
pub fn dedupe_by_identity_and_text_prefix(items: Vec<RawThreadItem>) -> Vec<RawThreadItem> {
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_texts: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(items.len());

    for item in items {
        let id = item.id();
        let text_key: String = item.text().chars().take(TEXT_PREFIX_LEN).collect();

        if !id.is_empty() && seen_ids.contains(&id) {
            continue;
        }
        if !text_key.is_empty() && seen_texts.contains(&text_key) {
            continue;
        }

        if !id.is_empty() {
            seen_ids.insert(id);
        }
        if !text_key.is_empty() {
            seen_texts.insert(text_key);
        }
        unique.push(item);
    }
    unique
}

/// Drops posts whose non-empty id was already seen. Posts with an empty
/// id cannot be proven duplicate and always pass.
pub fn dedupe_by_identity(posts: Vec<Post>) -> Vec<Post> {
    let mut seen: HashSet<String> = HashSet::new();
    posts
        .into_iter()
        .filter(|post| post.id.is_empty() || seen.insert(post.id.clone()))
        .collect()
}
