//! threads-scraper: fetch public Threads posts via the unofficial web
//! surface.
//!
//! Talks to the same endpoints the Threads web app calls internally:
//! server-rendered pages with embedded JSON, and the form-encoded GraphQL
//! API. No login is required for public profiles or search.

pub mod cache;
pub mod core;
pub mod dedup;
pub mod extract;
pub mod graphql;
pub mod parser;
pub mod profile;
pub mod search;

pub use crate::cache::{CacheDocument, write_cache};
pub use crate::core::client::{Backoff, RetryConfig, ThreadsClient, ThreadsClientBuilder};
pub use crate::core::error::ThreadsError;
pub use crate::core::models::Post;
pub use crate::core::raw::RawThreadItem;
pub use crate::extract::ExtractOptions;
pub use crate::profile::UserThreadsBuilder;
pub use crate::search::KeywordSearchBuilder;
