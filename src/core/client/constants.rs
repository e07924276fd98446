use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};

/// Default desktop browser user agent. Upstream serves server-rendered
/// profile pages to this UA; headless-looking agents get empty shells.
pub(crate) const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Web root; profile pages, search pages, and the GraphQL endpoint all
/// hang off this origin.
pub(crate) const DEFAULT_BASE_URL: &str = "https://www.threads.net";

/// Path of the GraphQL endpoint, relative to the base URL.
pub(crate) const GRAPHQL_PATH: &str = "api/graphql";

/// A public profile whose rendered page embeds an LSD token, relative to
/// the base URL.
pub(crate) const TOKEN_PAGE_PATH: &str = "@instagram";

/// Sentinel LSD value used when no token can be obtained. Requests carry
/// it so token-dependent calls degrade instead of aborting.
pub(crate) const LSD_FALLBACK: &str = "default";

/// Query id of `BarcelonaProfileThreadsTabQuery` (profile threads tab).
pub(crate) const DOC_ID_PROFILE_THREADS: &str = "6232751443445612";

/// Query id of the keyword search query.
pub(crate) const DOC_ID_SEARCH: &str = "6723348034398498";

/// Pages at or below this size are assumed to lack server-rendered thread
/// data and are routed to the GraphQL path instead.
pub(crate) const RENDERED_PAGE_MIN_BYTES: usize = 300_000;

/// Default per-request timeout for both profiles.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Headers for the API profile: XHR-shaped, same-origin CORS metadata.
/// `x-fb-lsd` starts at the fallback value and is overridden per request
/// once a real token is known.
pub(crate) fn api_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert("authority", HeaderValue::from_static("www.threads.net"));
    h.insert("accept", HeaderValue::from_static("*/*"));
    h.insert(
        "accept-language",
        HeaderValue::from_static("zh-TW,zh;q=0.9,en-US;q=0.8,en;q=0.7"),
    );
    h.insert("cache-control", HeaderValue::from_static("no-cache"));
    h.insert("origin", HeaderValue::from_static("https://www.threads.net"));
    h.insert("pragma", HeaderValue::from_static("no-cache"));
    h.insert("sec-fetch-dest", HeaderValue::from_static("empty"));
    h.insert("sec-fetch-mode", HeaderValue::from_static("cors"));
    h.insert("sec-fetch-site", HeaderValue::from_static("same-origin"));
    h.insert("x-fb-lsd", HeaderValue::from_static(LSD_FALLBACK));
    h.insert("x-ig-app-id", HeaderValue::from_static("238260118697367"));
    h
}

/// Headers for the page profile: a browser top-level navigation. This
/// shape is what convinces upstream to serve server-side rendered markup
/// with embedded thread data.
pub(crate) fn page_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        "accept",
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
        ),
    );
    h.insert(
        "accept-language",
        HeaderValue::from_static("zh-TW,zh;q=0.9,en-US;q=0.8,en;q=0.7"),
    );
    h.insert("cache-control", HeaderValue::from_static("no-cache"));
    h.insert("pragma", HeaderValue::from_static("no-cache"));
    h.insert(
        "sec-ch-ua",
        HeaderValue::from_static(r#""Chromium";v="131", "Not_A Brand";v="24""#),
    );
    h.insert("sec-ch-ua-mobile", HeaderValue::from_static("?0"));
    h.insert("sec-ch-ua-platform", HeaderValue::from_static(r#""macOS""#));
    h.insert("sec-fetch-dest", HeaderValue::from_static("document"));
    h.insert("sec-fetch-mode", HeaderValue::from_static("navigate"));
    h.insert("sec-fetch-site", HeaderValue::from_static("none"));
    h.insert("sec-fetch-user", HeaderValue::from_static("?1"));
    h.insert("upgrade-insecure-requests", HeaderValue::from_static("1"));
    h
}
