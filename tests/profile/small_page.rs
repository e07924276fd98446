use httpmock::Method::GET;
use threads_scraper::UserThreadsBuilder;

use crate::common;

#[tokio::test]
async fn shell_page_without_an_id_yields_no_posts() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    let page = common::padded_page("<div>profile shell</div>", 10_000);
    let page_mock = common::mock_profile_page(&server, "ghost", &page);
    let graphql = common::mock_graphql_failure(&server, 500);

    let posts = UserThreadsBuilder::new(&client, "ghost").fetch().await;

    assert!(posts.is_empty());
    page_mock.assert();
    graphql.assert_hits(0);
}

#[tokio::test]
async fn profile_page_errors_yield_no_posts() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/@gone");
        then.status(503);
    });

    let posts = UserThreadsBuilder::new(&client, "gone").fetch().await;

    assert!(posts.is_empty());
    page_mock.assert();
}
