use serde_json::json;
use threads_scraper::dedup::{
    TEXT_PREFIX_LEN, dedupe_by_identity, dedupe_by_identity_and_text_prefix,
};
use threads_scraper::{Post, RawThreadItem};

fn raw(pk: &str, text: &str) -> RawThreadItem {
    RawThreadItem::new(json!({"post": {"pk": pk, "caption": {"text": text}}}))
}

fn post(id: &str, text: &str) -> Post {
    Post {
        id: id.to_string(),
        username: "alice".to_string(),
        text: text.to_string(),
        like_count: 0,
        reply_count: 0,
        repost_count: 0,
        created_at: None,
        url: format!("https://www.threads.net/@alice/post/{id}"),
        category: None,
    }
}

/* -------- extraction-time pass -------- */

#[test]
fn repeated_id_keeps_the_first_item() {
    let unique =
        dedupe_by_identity_and_text_prefix(vec![raw("1", "first copy"), raw("1", "second copy")]);

    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].text(), "first copy");
}

#[test]
fn matching_text_prefix_collapses_items_with_distinct_ids() {
    let base = "a".repeat(TEXT_PREFIX_LEN);
    let unique = dedupe_by_identity_and_text_prefix(vec![
        raw("1", &format!("{base}X")),
        raw("2", &format!("{base}Y")),
    ]);

    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].id(), "1");
}

#[test]
fn texts_differing_inside_the_prefix_both_survive() {
    let base = "a".repeat(TEXT_PREFIX_LEN - 1);
    let unique = dedupe_by_identity_and_text_prefix(vec![
        raw("1", &format!("{base}X")),
        raw("2", &format!("{base}Y")),
    ]);

    assert_eq!(unique.len(), 2);
}

#[test]
fn an_idless_item_matching_a_seen_text_prefix_is_dropped() {
    let unique =
        dedupe_by_identity_and_text_prefix(vec![raw("1", "hello world"), raw("", "hello world")]);

    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].id(), "1");
}

#[test]
fn a_dropped_items_text_does_not_poison_later_items() {
    // The second item falls to the id check before its text is recorded,
    // so a third item carrying that same text still passes.
    let unique = dedupe_by_identity_and_text_prefix(vec![
        raw("1", "alpha"),
        raw("1", "beta"),
        raw("3", "beta"),
    ]);

    let ids: Vec<String> = unique.iter().map(RawThreadItem::id).collect();
    assert_eq!(ids, ["1", "3"]);
}

#[test]
fn items_with_no_id_and_no_text_are_never_duplicates() {
    let unique = dedupe_by_identity_and_text_prefix(vec![raw("", ""), raw("", "")]);

    assert_eq!(unique.len(), 2);
}

/* -------- aggregation-time pass -------- */

#[test]
fn aggregation_keeps_the_first_post_per_id() {
    let unique = dedupe_by_identity(vec![post("9", "kept"), post("9", "shadowed"), post("8", "c")]);

    let texts: Vec<&str> = unique.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, ["kept", "c"]);
}

#[test]
fn posts_with_empty_ids_always_pass_aggregation() {
    let unique = dedupe_by_identity(vec![post("", "x"), post("", "y")]);

    assert_eq!(unique.len(), 2);
}

#[test]
fn matching_text_never_drops_posts_in_aggregation() {
    let unique = dedupe_by_identity(vec![post("1", "same words"), post("2", "same words")]);

    assert_eq!(unique.len(), 2);
}

#[test]
fn aggregation_preserves_input_order() {
    let unique = dedupe_by_identity(vec![
        post("3", ""),
        post("1", ""),
        post("3", ""),
        post("2", ""),
        post("1", ""),
    ]);

    let ids: Vec<&str> = unique.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["3", "1", "2"]);
}
