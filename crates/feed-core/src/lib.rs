//! # feed-core
//!
//! Domain layer containing the feed entities, the per-card reaction state
//! machine, and the port trait through which the view talks to the server.
//! This crate has zero dependencies on infrastructure (HTTP client, DOM, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    decode_content, Comment, NewComment, Post, ReactionCounts, ReactionKind, ReactionState,
    ReactionTransition,
};
pub use error::DomainError;
pub use traits::{ApiResult, FeedApi};
pub use value_objects::PostId;
