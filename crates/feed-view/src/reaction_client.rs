//! Reaction client
//!
//! Reads and writes the session user's reaction on a post and keeps the
//! card's [`ReactionState`] in step with what the server confirmed.

use std::sync::Arc;

use feed_core::{ApiResult, FeedApi, Post, PostId, ReactionKind, ReactionState, ReactionTransition};
use tracing::{debug, info, instrument, warn};

/// What a reaction click did to the card state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// The server stored the reaction and the transition was applied
    Applied(ReactionTransition),
    /// The kind was already active; nothing was sent
    AlreadyActive,
    /// The write reported an error but the server holds the new reaction
    Reconciled(ReactionTransition),
}

impl ReactionOutcome {
    /// Whether the card state changed
    pub fn changed(&self) -> bool {
        !matches!(self, Self::AlreadyActive)
    }
}

#[derive(Clone)]
pub struct ReactionClient {
    api: Arc<dyn FeedApi>,
}

impl ReactionClient {
    pub fn new(api: Arc<dyn FeedApi>) -> Self {
        Self { api }
    }

    /// Reaction the session user holds on a post
    pub async fn get_user_reaction(&self, post_id: &PostId) -> ApiResult<Option<ReactionKind>> {
        self.api.user_reaction(post_id).await
    }

    /// Initial card state: the post's counts plus the user's reaction.
    ///
    /// A failed read is logged and treated as no reaction.
    #[instrument(skip_all, fields(post_id = %post.post_id))]
    pub async fn initial_state(&self, post: &Post) -> ReactionState {
        let active = match self.get_user_reaction(&post.post_id).await {
            Ok(active) => active,
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "Could not load user reaction");
                None
            }
        };
        ReactionState::new(post.reactions, active)
    }

    /// Set the user's reaction and apply the confirmed transition to `state`.
    ///
    /// When the write fails, `state` is aligned with the reaction the server
    /// reports and the write error is returned, unless the server already
    /// holds `kind`.
    #[instrument(skip(self, state))]
    pub async fn set_reaction(
        &self,
        kind: ReactionKind,
        post_id: &PostId,
        state: &mut ReactionState,
    ) -> ApiResult<ReactionOutcome> {
        if state.is_active(kind) {
            debug!("Reaction already active");
            return Ok(ReactionOutcome::AlreadyActive);
        }

        match self.api.set_reaction(kind, post_id).await {
            Ok(()) => {
                let outcome = state
                    .select(kind)
                    .map_or(ReactionOutcome::AlreadyActive, ReactionOutcome::Applied);
                info!(post_id = %post_id, kind = %kind, "Reaction set");
                Ok(outcome)
            }
            Err(e) => {
                warn!(error = %e, "Reaction write failed, checking server state");
                match self.api.user_reaction(post_id).await {
                    Ok(Some(held)) if held == kind => match state.select(kind) {
                        Some(transition) => Ok(ReactionOutcome::Reconciled(transition)),
                        None => Ok(ReactionOutcome::AlreadyActive),
                    },
                    Ok(server) => {
                        if state.sync_with(server) {
                            info!(server = ?server, "Card state moved to server reaction");
                        }
                        Err(e)
                    }
                    Err(read) => {
                        debug!(error = %read, "Reconcile read failed");
                        Err(e)
                    }
                }
            }
        }
    }
}
