use serde_json::json;
use threads_scraper::UserThreadsBuilder;

use crate::common;

#[tokio::test]
async fn small_page_resolves_the_user_id_and_queries_graphql() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    let shell = r#"<html><script>{"userID":"555123"}</script></html>"#;
    let page_mock = common::mock_profile_page(&server, "bob", shell);
    let token = common::mock_token_page(&server);

    let threads = json!([{
        "thread_items": [
            common::post_item("900", "bob", "from api"),
            {"post": {"pk": "901", "caption": {"text": "no author"}}},
        ]
    }]);
    let graphql = common::mock_graphql_with_lsd(
        &server,
        common::TEST_LSD,
        &common::profile_threads_response(threads),
    );

    let posts = UserThreadsBuilder::new(&client, "bob").fetch().await;

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "900");
    assert_eq!(posts[0].username, "bob");
    assert_eq!(posts[0].text, "from api");
    assert_eq!(posts[0].url, "https://www.threads.net/@bob/post/C900");
    // The queried username fills in when the payload has no author.
    assert_eq!(posts[1].username, "bob");

    page_mock.assert();
    token.assert();
    graphql.assert();
}

#[tokio::test]
async fn persistent_graphql_failure_degrades_to_empty() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    common::mock_profile_page(&server, "bob", r#"<script>{"pk":"4242"}</script>"#);
    common::mock_token_page(&server);
    let graphql = common::mock_graphql_failure(&server, 500);

    let posts = UserThreadsBuilder::new(&client, "bob").fetch().await;

    assert!(posts.is_empty());
    graphql.assert_hits(3);
}
