//! In-memory [`FeedApi`] used by the unit tests of this crate

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use feed_core::{
    ApiResult, Comment, DomainError, FeedApi, NewComment, Post, PostId, ReactionCounts,
    ReactionKind,
};

#[derive(Default)]
pub struct FakeFeedApi {
    posts: Vec<Post>,
    reactions: Mutex<HashMap<PostId, ReactionKind>>,
    delays: HashMap<PostId, Duration>,
    failing_reads: HashSet<PostId>,
    fail_list: bool,
    /// Reject writes; when `Some(kind)`, the server still ends up holding `kind`
    fail_writes: Option<Option<ReactionKind>>,
    writes: Mutex<Vec<(ReactionKind, PostId)>>,
    comments: Mutex<Vec<NewComment>>,
}

impl FakeFeedApi {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    pub fn with_reaction(self, post_id: i64, kind: ReactionKind) -> Self {
        self.reactions
            .lock()
            .unwrap()
            .insert(PostId::from(post_id), kind);
        self
    }

    pub fn with_delay(mut self, post_id: i64, millis: u64) -> Self {
        self.delays
            .insert(PostId::from(post_id), Duration::from_millis(millis));
        self
    }

    pub fn with_failing_read(mut self, post_id: i64) -> Self {
        self.failing_reads.insert(PostId::from(post_id));
        self
    }

    pub fn with_failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn with_failing_writes(mut self, server_ends_with: Option<ReactionKind>) -> Self {
        self.fail_writes = Some(server_ends_with);
        self
    }

    pub fn writes(&self) -> Vec<(ReactionKind, PostId)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedApi for FakeFeedApi {
    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        if self.fail_list {
            return Err(DomainError::UnexpectedStatus {
                status: 500,
                endpoint: "/api/posts".to_string(),
            });
        }
        Ok(self.posts.clone())
    }

    async fn user_reaction(&self, post_id: &PostId) -> ApiResult<Option<ReactionKind>> {
        if let Some(delay) = self.delays.get(post_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_reads.contains(post_id) {
            return Err(DomainError::TransportError("connection reset".to_string()));
        }
        Ok(self.reactions.lock().unwrap().get(post_id).copied())
    }

    async fn set_reaction(&self, kind: ReactionKind, post_id: &PostId) -> ApiResult<()> {
        self.writes.lock().unwrap().push((kind, post_id.clone()));
        if let Some(server_state) = self.fail_writes {
            let mut reactions = self.reactions.lock().unwrap();
            match server_state {
                Some(held) => reactions.insert(post_id.clone(), held),
                None => reactions.remove(post_id),
            };
            return Err(DomainError::UnexpectedStatus {
                status: 502,
                endpoint: "/api/reaction".to_string(),
            });
        }
        self.reactions.lock().unwrap().insert(post_id.clone(), kind);
        Ok(())
    }

    async fn submit_comment(&self, comment: &NewComment) -> ApiResult<()> {
        let comment = comment.clone().validated()?;
        self.comments.lock().unwrap().push(comment);
        Ok(())
    }
}

pub fn post(id: i64, counts: ReactionCounts) -> Post {
    Post {
        post_id: PostId::from(id),
        email: format!("user{id}@example.com"),
        datetime: "2024-05-01 10:00:00 UTC".to_string(),
        title: format!("Post {id}"),
        content: "Hello%20there".to_string(),
        image: None,
        reactions: counts,
        comments: Vec::<Comment>::new(),
    }
}
