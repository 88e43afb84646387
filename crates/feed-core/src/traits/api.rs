//! Feed API port - the four server endpoints the client consumes
//!
//! The view layer depends only on this trait; the HTTP implementation lives
//! in an infrastructure crate and tests substitute in-memory fakes.

use async_trait::async_trait;

use crate::entities::{NewComment, Post, ReactionKind};
use crate::error::DomainError;
use crate::value_objects::PostId;

/// Result type for API operations
pub type ApiResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait FeedApi: Send + Sync {
    /// Fetch every post, in server order (`GET /api/posts`)
    async fn list_posts(&self) -> ApiResult<Vec<Post>>;

    /// Reaction the session user currently holds on a post
    /// (`GET /api/userreaction?post_id=`)
    async fn user_reaction(&self, post_id: &PostId) -> ApiResult<Option<ReactionKind>>;

    /// Set the session user's reaction on a post (`POST /api/reaction`)
    async fn set_reaction(&self, kind: ReactionKind, post_id: &PostId) -> ApiResult<()>;

    /// Submit the comment form (`POST /api/comment`)
    async fn submit_comment(&self, comment: &NewComment) -> ApiResult<()>;
}
