//! Public client surface + builder.
//! Internals are split into `auth` (LSD token), `retry` (backoff policy)
//! and `constants` (header profiles + endpoint defaults).

mod auth;
mod constants;
mod retry;

pub use retry::{Backoff, RetryConfig};

pub(crate) use constants::{DOC_ID_PROFILE_THREADS, DOC_ID_SEARCH, RENDERED_PAGE_MIN_BYTES};

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, GRAPHQL_PATH, TOKEN_PAGE_PATH};
use reqwest::Client;
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use url::Url;

use crate::core::error::ThreadsError;
use crate::extract::ExtractOptions;

#[derive(Debug, Default)]
struct ClientState {
    lsd_token: Option<String>,
}

/// Client for the unofficial Threads web surface.
///
/// Carries two independently configured request profiles: a page profile
/// with browser-navigation headers (upstream serves server-rendered markup
/// to it) and an API profile with XHR headers for the GraphQL endpoint.
/// Each profile keeps its own cookie jar and connection pool.
///
/// Cloning is cheap; clones share the memoized LSD token.
#[derive(Debug, Clone)]
pub struct ThreadsClient {
    page: Client,
    api: Client,
    base_url: Url,
    graphql_url: Url,
    token_url: Url,
    retry: RetryConfig,
    extract_opts: ExtractOptions,
    offline_dir: Option<PathBuf>,
    state: Arc<RwLock<ClientState>>,
    token_fetch_lock: Arc<Mutex<()>>,
}

impl Default for ThreadsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl ThreadsClient {
    /// Create a new builder.
    pub fn builder() -> ThreadsClientBuilder {
        ThreadsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn extract_options(&self) -> &ExtractOptions {
        &self.extract_opts
    }

    pub(crate) fn offline_dir(&self) -> Option<&Path> {
        self.offline_dir.as_deref()
    }

    /* -------- transport -------- */

    /// `GET` a rendered page through the page profile. Single attempt; the
    /// calling strategy decides how to degrade.
    pub(crate) async fn fetch_page(
        &self,
        mut url: Url,
        params: &[(&str, &str)],
    ) -> Result<String, ThreadsError> {
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        debug!(url = %url, "fetching page");
        let resp = self.page.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ThreadsError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.text().await?)
    }

    /// `POST` a GraphQL query through the API profile.
    ///
    /// The body is form-encoded (`lsd`, `variables`, `doc_id`) the way the
    /// web app submits it. Send errors, non-success statuses and bodies
    /// that fail to decode as JSON are all retried per the client's
    /// [`RetryConfig`]; the last failure is surfaced when attempts run out.
    pub(crate) async fn graphql(
        &self,
        doc_id: &str,
        variables: &Value,
    ) -> Result<Value, ThreadsError> {
        let lsd = self.lsd_token().await;
        let form = [
            ("lsd", lsd.clone()),
            ("variables", variables.to_string()),
            ("doc_id", doc_id.to_string()),
        ];

        let mut last_err: Option<ThreadsError> = None;
        for attempt in 0..self.retry.max_attempts {
            if attempt > 0 {
                tokio::time::sleep(self.retry.delay(attempt - 1)).await;
            }
            match self.graphql_once(&form, &lsd).await {
                Ok(v) => return Ok(v),
                Err(e) => {
                    debug!(attempt = attempt + 1, doc_id, error = %e, "graphql attempt failed");
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| ThreadsError::Data("no graphql attempts were made".into())))
    }

    async fn graphql_once(
        &self,
        form: &[(&str, String); 3],
        lsd: &str,
    ) -> Result<Value, ThreadsError> {
        let resp = self
            .api
            .post(self.graphql_url.clone())
            .header("x-fb-lsd", lsd)
            .form(form)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ThreadsError::Status {
                status: status.as_u16(),
                url: self.graphql_url.to_string(),
            });
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ThreadsClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    graphql_url: Option<Url>,
    token_url: Option<Url>,
    timeout: Option<Duration>,
    retry: Option<RetryConfig>,
    extract_opts: Option<ExtractOptions>,
    offline_dir: Option<PathBuf>,
}

impl ThreadsClientBuilder {
    /// Override the User-Agent used by both profiles.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the web root (e.g., `https://www.threads.net`). The
    /// GraphQL and token-page URLs are derived from it unless overridden
    /// themselves.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the GraphQL endpoint.
    pub fn graphql_url(mut self, url: Url) -> Self {
        self.graphql_url = Some(url);
        self
    }

    /// Override the page the LSD token is read from.
    pub fn token_url(mut self, url: Url) -> Self {
        self.token_url = Some(url);
        self
    }

    /// Set the overall per-request timeout. Default: 15 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Override the GraphQL retry policy.
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Tune the embedded-data scanner.
    pub fn extract_options(mut self, opts: ExtractOptions) -> Self {
        self.extract_opts = Some(opts);
        self
    }

    /// Serve per-user fixtures from a directory instead of the network.
    pub fn offline_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.offline_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> Result<ThreadsClient, ThreadsError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let graphql_url = match self.graphql_url {
            Some(u) => u,
            None => base_url.join(GRAPHQL_PATH)?,
        };
        let token_url = match self.token_url {
            Some(u) => u,
            None => base_url.join(TOKEN_PAGE_PATH)?,
        };

        let ua = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let page = Client::builder()
            .user_agent(ua)
            .default_headers(constants::page_headers())
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        let api = Client::builder()
            .user_agent(ua)
            .default_headers(constants::api_headers())
            .cookie_store(true)
            .timeout(timeout)
            .build()?;

        Ok(ThreadsClient {
            page,
            api,
            base_url,
            graphql_url,
            token_url,
            retry: self.retry.unwrap_or_default(),
            extract_opts: self.extract_opts.unwrap_or_default(),
            offline_dir: self.offline_dir,
            state: Arc::new(RwLock::new(ClientState::default())),
            token_fetch_lock: Arc::new(Mutex::new(())),
        })
    }
}
