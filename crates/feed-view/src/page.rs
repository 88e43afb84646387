//! Feed page
//!
//! Owns the document and the per-card view models. All DOM mutation goes
//! through `&mut FeedPage`: the loader appends cards, reaction clicks
//! re-render a single card's reactions region.

use std::collections::HashMap;
use std::fmt;

use feed_core::{ApiResult, DomainError, Post, PostId, ReactionKind, ReactionState};
use tracing::{debug, warn};

use crate::card::{reactions_region, CardBuilder, REACTIONS_ID};
use crate::dom::Document;
use crate::reaction_client::{ReactionClient, ReactionOutcome};

/// Id of the element cards are appended to
pub const CONTAINER_ID: &str = "posts";

/// View model of one mounted card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub post: Post,
    pub reactions: ReactionState,
}

/// A transient user-facing message about a failed action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub post_id: PostId,
    pub code: &'static str,
    pub message: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "post {}: {}", self.post_id, self.message)
    }
}

pub struct FeedPage {
    document: Document,
    builder: CardBuilder,
    reactions: ReactionClient,
    cards: HashMap<PostId, CardView>,
    order: Vec<PostId>,
    notices: Vec<Notice>,
}

impl FeedPage {
    /// Page with an empty `posts` container
    pub fn new(title: &str, builder: CardBuilder, reactions: ReactionClient) -> Self {
        Self::with_document(Document::with_container(title, CONTAINER_ID), builder, reactions)
    }

    pub fn with_document(
        document: Document,
        builder: CardBuilder,
        reactions: ReactionClient,
    ) -> Self {
        Self {
            document,
            builder,
            reactions,
            cards: HashMap::new(),
            order: Vec::new(),
            notices: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn reactions_enabled(&self) -> bool {
        self.builder.options().reactions
    }

    pub fn reaction_client(&self) -> &ReactionClient {
        &self.reactions
    }

    /// Whether the feed container is mounted
    pub fn has_container(&self) -> bool {
        self.document.element_by_id(CONTAINER_ID).is_some()
    }

    /// Build a card and append it to the container
    pub fn insert_card(&mut self, post: Post, reactions: ReactionState) -> Result<(), DomainError> {
        let card = self.builder.build(&post, &reactions)?;
        self.document.append_to(CONTAINER_ID, card)?;

        debug!(post_id = %post.post_id, "Card inserted");
        self.order.push(post.post_id.clone());
        self.cards
            .insert(post.post_id.clone(), CardView { post, reactions });
        Ok(())
    }

    pub fn card(&self, post_id: &PostId) -> Option<&CardView> {
        self.cards.get(post_id)
    }

    /// Ids of mounted cards in insertion order
    pub fn card_ids(&self) -> &[PostId] {
        &self.order
    }

    /// Handle a click on a reaction button.
    ///
    /// The card's reactions region is re-rendered whenever its state moved,
    /// including when a failed write leaves the server on another reaction.
    /// Failures queue a notice.
    pub async fn click_reaction(
        &mut self,
        post_id: &PostId,
        kind: ReactionKind,
    ) -> ApiResult<ReactionOutcome> {
        if !self.reactions_enabled() {
            return Err(DomainError::MissingAnchor(REACTIONS_ID.to_string()));
        }
        let current = self
            .cards
            .get(post_id)
            .map(|view| view.reactions)
            .ok_or_else(|| DomainError::PostNotFound(post_id.clone()))?;

        let mut state = current;
        let result = self.reactions.set_reaction(kind, post_id, &mut state).await;

        if state != current {
            if let Err(e) = self.render_reactions(post_id, state) {
                warn!(post_id = %post_id, error = %e, "Reactions region not re-rendered");
                self.push_notice(post_id, &e);
                return Err(e);
            }
        }

        result.inspect_err(|e| {
            warn!(post_id = %post_id, kind = %kind, error = %e, "Reaction click failed");
            self.push_notice(post_id, e);
        })
    }

    /// Replace the card's reactions region, then commit `state` to its view model
    fn render_reactions(
        &mut self,
        post_id: &PostId,
        state: ReactionState,
    ) -> Result<(), DomainError> {
        let region = self
            .document
            .require_mut(post_id.as_str())?
            .find_by_id_mut(REACTIONS_ID)
            .ok_or_else(|| DomainError::MissingAnchor(REACTIONS_ID.to_string()))?;
        *region = reactions_region(post_id, &state);

        if let Some(view) = self.cards.get_mut(post_id) {
            view.reactions = state;
        }
        Ok(())
    }

    fn push_notice(&mut self, post_id: &PostId, error: &DomainError) {
        self.notices.push(Notice {
            post_id: post_id.clone(),
            code: error.code(),
            message: format!("Could not set reaction: {error}"),
        });
    }

    /// Drain queued notices
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn to_html(&self) -> String {
        self.document.to_html()
    }
}
