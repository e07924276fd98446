use serde_json::json;
use threads_scraper::{ThreadsClient, UserThreadsBuilder};

use crate::common;

fn offline_client(dir: &std::path::Path) -> ThreadsClient {
    ThreadsClient::builder()
        .offline_dir(dir)
        .build()
        .unwrap()
}

#[tokio::test]
async fn offline_fixtures_replace_the_network() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = json!([
        common::post_item("501", "alice", "recorded post"),
        {"post": {}},
    ]);
    std::fs::write(dir.path().join("alice.json"), fixture.to_string()).unwrap();

    let posts = UserThreadsBuilder::new(&offline_client(dir.path()), "alice")
        .fetch()
        .await;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "501");
    assert_eq!(posts[0].text, "recorded post");
}

#[tokio::test]
async fn a_missing_fixture_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();

    let posts = UserThreadsBuilder::new(&offline_client(dir.path()), "nobody")
        .fetch()
        .await;

    assert!(posts.is_empty());
}

#[tokio::test]
async fn an_unreadable_fixture_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.json"), "not json at all").unwrap();

    let posts = UserThreadsBuilder::new(&offline_client(dir.path()), "broken")
        .fetch()
        .await;

    assert!(posts.is_empty());
}
