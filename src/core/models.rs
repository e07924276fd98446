use serde::{Deserialize, Serialize};

/// A single public Threads post, normalized from either extraction pipeline.
///
/// Field values are always concrete: absent upstream values become empty
/// strings or zero counts, never nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Upstream-assigned identifier. Empty when the payload carried none;
    /// such posts are treated as unidentified and are never deduplicated.
    pub id: String,
    /// Author handle. Falls back to the queried username when the payload
    /// has none.
    pub username: String,
    /// Caption text, empty when the post has no caption.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub like_count: u64,
    /// Direct replies only, not the whole conversation tree.
    #[serde(default)]
    pub reply_count: u64,
    #[serde(default)]
    pub repost_count: u64,
    /// Platform-native creation timestamp, seconds. Opaque; not validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Canonical web URL. An unresolved short code leaves a trailing empty
    /// segment rather than invalidating the post.
    pub url: String,
    /// Tag attached by aggregating callers, never by the parser.
    #[serde(rename = "_category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
