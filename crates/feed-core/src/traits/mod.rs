//! Port traits implemented by infrastructure crates

mod api;

pub use api::{ApiResult, FeedApi};
