//! Feed loader
//!
//! Fetches the posts, resolves each card's initial reaction state
//! concurrently and appends the cards in server order.

use std::sync::Arc;

use feed_core::{ApiResult, DomainError, FeedApi, PostId, ReactionState};
use futures::stream::{self, StreamExt};
use tracing::{info, instrument, warn};

use crate::page::{FeedPage, CONTAINER_ID};

/// Result of a feed load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Cards appended, in document order
    pub inserted: Vec<PostId>,
    /// Posts whose card could not be built
    pub failed: Vec<PostId>,
}

impl LoadReport {
    pub fn total(&self) -> usize {
        self.inserted.len() + self.failed.len()
    }
}

pub struct FeedLoader {
    api: Arc<dyn FeedApi>,
    max_concurrent: usize,
}

impl FeedLoader {
    pub fn new(api: Arc<dyn FeedApi>, max_concurrent: usize) -> Self {
        Self {
            api,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Load every post into the page's container
    #[instrument(skip_all)]
    pub async fn load(&self, page: &mut FeedPage) -> ApiResult<LoadReport> {
        if !page.has_container() {
            return Err(DomainError::MissingAnchor(CONTAINER_ID.to_string()));
        }

        let posts = self.api.list_posts().await?;
        info!(count = posts.len(), "Posts fetched");

        let reactions = page.reaction_client().clone();
        let with_reactions = page.reactions_enabled();

        // `buffered` polls up to `max_concurrent` fetches at once but yields
        // results in input order.
        let mut states = stream::iter(posts)
            .map(|post| {
                let reactions = reactions.clone();
                async move {
                    let state = if with_reactions {
                        reactions.initial_state(&post).await
                    } else {
                        ReactionState::new(post.reactions, None)
                    };
                    (post, state)
                }
            })
            .buffered(self.max_concurrent);

        let mut report = LoadReport::default();
        while let Some((post, state)) = states.next().await {
            let post_id = post.post_id.clone();
            match page.insert_card(post, state) {
                Ok(()) => report.inserted.push(post_id),
                Err(e) => {
                    warn!(post_id = %post_id, error = %e, "Skipping card that failed to build");
                    report.failed.push(post_id);
                }
            }
        }

        info!(
            inserted = report.inserted.len(),
            failed = report.failed.len(),
            "Feed loaded"
        );
        Ok(report)
    }
}
