//! Integration test utilities for the feed renderer
//!
//! Provides a stub feed server that speaks the four feed endpoints, plus
//! sample payloads, for end-to-end tests of the HTTP client and the view.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
