//! Normalization of GraphQL response bodies into raw thread items.
//!
//! Upstream is loose about collection shape. The thread container under
//! `data.mediaData.threads` (profile) or `data.searchResults` (search)
//! arrives either as a plain array of nodes or edge-wrapped as
//! `{"edges": [{"node": ...}]}`. Both shapes are normalized to one node
//! sequence, then each node's `thread_items` are flattened out in order.

use serde_json::Value;

use crate::core::raw::RawThreadItem;

/// Raw items from a profile-threads response.
///
/// `limit` caps thread nodes, not flattened items; a node may carry
/// several items and they all belong to the same upstream page slot.
pub fn profile_thread_items(response: &Value, limit: usize) -> Vec<RawThreadItem> {
    let threads = response
        .get("data")
        .and_then(|d| d.get("mediaData"))
        .and_then(|m| m.get("threads"));
    collect_thread_items(threads, limit)
}

/// Raw items from a keyword-search response.
pub fn search_thread_items(response: &Value, limit: usize) -> Vec<RawThreadItem> {
    let results = response.get("data").and_then(|d| d.get("searchResults"));
    collect_thread_items(results, limit)
}

fn collect_thread_items(container: Option<&Value>, limit: usize) -> Vec<RawThreadItem> {
    let mut items = Vec::new();
    for node in thread_nodes(container).into_iter().take(limit) {
        if let Some(thread_items) = node.get("thread_items").and_then(Value::as_array) {
            items.extend(thread_items.iter().cloned().map(RawThreadItem::new));
        }
    }
    items
}

/// One node sequence out of either collection shape. An edge without a
/// `node` member stands in for its own node.
fn thread_nodes(container: Option<&Value>) -> Vec<&Value> {
    match container {
        Some(Value::Array(nodes)) => nodes.iter().collect(),
        Some(Value::Object(map)) => map
            .get("edges")
            .and_then(Value::as_array)
            .map(|edges| edges.iter().map(|edge| edge.get("node").unwrap_or(edge)).collect())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}
