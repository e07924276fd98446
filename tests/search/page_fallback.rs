use httpmock::Method::GET;
use serde_json::json;
use threads_scraper::KeywordSearchBuilder;

use crate::common;

fn mock_search_page<'a>(
    server: &'a httpmock::MockServer,
    keyword: &str,
    body: &str,
) -> httpmock::Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", keyword)
            .query_param("serp_type", "default");
        then.status(200)
            .header("content-type", "text/html")
            .body(body);
    })
}

#[tokio::test]
async fn api_failure_falls_back_to_the_search_page() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    common::mock_token_page(&server);
    let graphql = common::mock_graphql_failure(&server, 500);

    let items = json!([common::post_item("31", "carol", "fallback hit")]);
    let page = common::thread_items_fragment(&items.to_string());
    let search_page = mock_search_page(&server, "breaking", &page);

    let posts = KeywordSearchBuilder::new(&client, "breaking").fetch().await;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "31");
    assert_eq!(posts[0].username, "carol");

    graphql.assert_hits(3);
    search_page.assert();
}

#[tokio::test]
async fn an_empty_api_result_also_falls_back() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    common::mock_token_page(&server);
    let graphql = common::mock_graphql(
        &server,
        &common::search_results_response(json!({"edges": []})),
    );

    let items = json!([common::post_item("32", "dave", "still found")]);
    let page = common::thread_items_fragment(&items.to_string());
    let search_page = mock_search_page(&server, "quiet", &page);

    let posts = KeywordSearchBuilder::new(&client, "quiet").fetch().await;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "32");

    // A clean-but-empty response is not retried before falling back.
    graphql.assert_hits(1);
    search_page.assert();
}

#[tokio::test]
async fn both_paths_failing_degrades_to_empty() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    common::mock_token_page(&server);
    common::mock_graphql_failure(&server, 500);
    let search_page = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(429).body("slow down");
    });

    let posts = KeywordSearchBuilder::new(&client, "anything").fetch().await;

    assert!(posts.is_empty());
    search_page.assert();
}
