//! Extraction of thread data embedded in server-rendered markup.
//!
//! Profile and search pages carry their post data inside script blocks as
//! `"thread_items":[...]` fragments. The surrounding markup is not JSON,
//! so the document cannot be decoded wholesale, and regex alone cannot
//! match the nested arrays. Each marker occurrence is therefore localized
//! textually and its array delimited by a bounded balanced-bracket scan
//! before being decoded on its own.

mod scan;

pub use scan::ExtractOptions;

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::core::raw::RawThreadItem;
use crate::dedup;

fn thread_items_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""thread_items"\s*:"#).expect("marker pattern"))
}

fn user_id_patterns() -> &'static [Regex; 3] {
    static RES: OnceLock<[Regex; 3]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            Regex::new(r#""pk":"(\d+)""#).expect("pk pattern"),
            Regex::new(r#""userID":"(\d+)""#).expect("userID pattern"),
            Regex::new(r#""user_id":"(\d+)""#).expect("user_id pattern"),
        ]
    })
}

/// Extracts raw thread items from rendered profile or search markup.
///
/// Occurrences are processed independently: a missing array-open within
/// the lookahead, an array that does not close inside the scan window, or
/// a fragment that fails to decode each skips that one occurrence and the
/// scan moves on. Decoded elements without a usable `post` object are
/// dropped. The surviving items are deduplicated (identity + text prefix)
/// and only then capped to `limit`.
pub fn extract_thread_items(html: &str, limit: usize, opts: &ExtractOptions) -> Vec<RawThreadItem> {
    let mut items = Vec::new();

    for m in thread_items_marker().find_iter(html) {
        let after_marker = m.end();
        let Some(rel) = html[after_marker..].find('[') else {
            continue;
        };
        if rel > opts.marker_lookahead {
            continue;
        }
        let arr_start = after_marker + rel;

        let Some(arr_end) = scan::find_array_end(html, arr_start, opts.max_scan_window) else {
            debug!(offset = arr_start, "embedded array did not close in window, skipping");
            continue;
        };

        let elements: Vec<Value> = match serde_json::from_str(&html[arr_start..=arr_end]) {
            Ok(v) => v,
            Err(e) => {
                debug!(offset = arr_start, error = %e, "embedded array failed to decode, skipping");
                continue;
            }
        };

        for element in elements {
            let item = RawThreadItem::new(element);
            if item.post().is_some() {
                items.push(item);
            }
        }
    }

    let mut unique = dedup::dedupe_by_identity_and_text_prefix(items);
    unique.truncate(limit);
    unique
}

/// Resolves the numeric user id embedded in a rendered profile page.
///
/// Three encodings are tried in order (`pk` in embedded JSON, `userID` in
/// relay data, `user_id` in cookie data); the first match wins.
pub fn resolve_user_id(html: &str) -> Option<String> {
    user_id_patterns()
        .iter()
        .find_map(|re| re.captures(html))
        .map(|caps| caps[1].to_string())
}
