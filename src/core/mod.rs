//! Core building blocks shared by every pipeline: the client, the error
//! type, the canonical post model and the raw item representation.

pub mod client;
pub mod error;
pub mod models;
pub mod raw;

pub use client::{Backoff, RetryConfig, ThreadsClient, ThreadsClientBuilder};
pub use error::ThreadsError;
pub use models::Post;
pub use raw::RawThreadItem;
