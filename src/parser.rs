//! Mapping of raw thread items into canonical posts.

use serde_json::Value;

use crate::core::models::Post;
use crate::core::raw::{self, RawThreadItem};

/// Origin used when building canonical post URLs. Post URLs always point
/// at the public site, independent of which endpoint served the data.
const POST_URL_BASE: &str = "https://www.threads.net";

/// Maps one raw thread item to a canonical [`Post`].
///
/// Every field is read defensively. A missing `post`, `user` or `caption`
/// sub-object degrades to defaults rather than failing, and counts of an
/// unexpected type become zero. `default_username` fills in the author
/// when the payload names none (pass the queried username, or empty for
/// keyword search).
///
/// Returns `None` only when both the identifier and the text are empty
/// after defaulting; that also covers items with no `post` object at all.
pub fn parse_item(item: &RawThreadItem, default_username: &str) -> Option<Post> {
    let post = item.post()?;
    let id = item.id();
    let text = item.text();
    if id.is_empty() && text.is_empty() {
        return None;
    }

    let username = post
        .get("user")
        .and_then(|u| u.get("username"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(default_username)
        .to_string();

    let reply_count = post
        .get("text_post_app_info")
        .filter(|v| v.is_object())
        .map(|info| raw::count_field(info, "direct_reply_count"))
        .unwrap_or(0);

    let url = format!(
        "{POST_URL_BASE}/@{username}/post/{}",
        raw::str_field(post, "code")
    );

    Some(Post {
        id,
        username,
        text,
        like_count: raw::count_field(post, "like_count"),
        reply_count,
        repost_count: raw::count_field(post, "repost_count"),
        created_at: post.get("taken_at").and_then(Value::as_i64),
        url,
        category: None,
    })
}

/// Parses a whole raw item sequence, dropping items that do not form a
/// valid post. Order is preserved; no deduplication happens here.
pub fn parse_items(items: &[RawThreadItem], default_username: &str) -> Vec<Post> {
    items
        .iter()
        .filter_map(|item| parse_item(item, default_username))
        .collect()
}
