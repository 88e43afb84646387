//! # feed-client
//!
//! reqwest-based implementation of the [`feed_core::FeedApi`] port.

pub mod error;
pub mod http_api;
pub mod wire;

pub use error::ClientError;
pub use http_api::HttpFeedApi;
