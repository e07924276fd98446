//! LSD token acquisition.
//!
//! The GraphQL endpoint wants an `lsd` form field and an `x-fb-lsd`
//! header. A usable value is embedded in any server-rendered page, so the
//! token is scraped from a known public profile once and memoized for the
//! lifetime of the client, fallback included.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{info, warn};

use super::constants::LSD_FALLBACK;

fn token_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""LSD",\[\],\{"token":"([^"]+)""#).expect("token pattern"))
}

impl super::ThreadsClient {
    /// The LSD token, fetched on first use.
    ///
    /// Never fails: when the reference page cannot be fetched or does not
    /// contain the pattern, a fixed fallback sentinel is memoized instead,
    /// and token-dependent calls degrade rather than abort. The memoized
    /// value is held until [`reset_lsd_token`](Self::reset_lsd_token);
    /// upstream invalidation does not trigger a re-fetch.
    pub async fn lsd_token(&self) -> String {
        if let Some(token) = self.state.read().await.lsd_token.clone() {
            return token;
        }

        // Serialize fetches so concurrent first calls do not race; the
        // second check covers a fetch that finished while we waited.
        let _guard = self.token_fetch_lock.lock().await;
        if let Some(token) = self.state.read().await.lsd_token.clone() {
            return token;
        }

        let token = self.fetch_lsd_token().await;
        self.state.write().await.lsd_token = Some(token.clone());
        token
    }

    /// Forget the memoized token so the next call fetches a fresh one.
    pub async fn reset_lsd_token(&self) {
        self.state.write().await.lsd_token = None;
    }

    async fn fetch_lsd_token(&self) -> String {
        let body = match self.page.get(self.token_url.clone()).send().await {
            Ok(resp) => match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(error = %e, "failed to read LSD token page");
                    return LSD_FALLBACK.to_string();
                }
            },
            Err(e) => {
                warn!(error = %e, "failed to fetch LSD token page");
                return LSD_FALLBACK.to_string();
            }
        };

        match token_pattern().captures(&body).and_then(|c| c.get(1)) {
            Some(m) => {
                let token = m.as_str().to_string();
                let prefix: String = token.chars().take(8).collect();
                info!(%prefix, "obtained LSD token");
                token
            }
            None => {
                warn!(bytes = body.len(), "no LSD token in page, using fallback");
                LSD_FALLBACK.to_string()
            }
        }
    }
}
