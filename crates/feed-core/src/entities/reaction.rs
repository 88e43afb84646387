//! Reaction entities - the fixed reaction kinds, their counts on a post, and
//! the per-card state machine for the viewing user's own reaction

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One of the fixed, closed set of reactions a user can put on a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReactionKind {
    Heart,
    ThumbsUp,
    ThumbsDown,
}

impl ReactionKind {
    /// All kinds in display order
    pub const ALL: [ReactionKind; 3] = [Self::Heart, Self::ThumbsUp, Self::ThumbsDown];

    /// Wire name used in query strings, form bodies and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::ThumbsUp => "thumbsUp",
            Self::ThumbsDown => "thumbsDown",
        }
    }

    /// Glyph shown on the reaction button
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Heart => "\u{2764}\u{fe0f}",
            Self::ThumbsUp => "\u{1f44d}",
            Self::ThumbsDown => "\u{1f44e}",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heart" => Ok(Self::Heart),
            "thumbsUp" => Ok(Self::ThumbsUp),
            "thumbsDown" => Ok(Self::ThumbsDown),
            other => Err(DomainError::InvalidReactionKind(other.to_string())),
        }
    }
}

/// Aggregated reaction counts for one post
///
/// Kinds missing from the server payload count as zero; unknown keys are
/// ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReactionCounts {
    pub heart: u32,
    pub thumbs_up: u32,
    pub thumbs_down: u32,
}

impl ReactionCounts {
    /// Create counts from explicit values
    pub fn new(heart: u32, thumbs_up: u32, thumbs_down: u32) -> Self {
        Self {
            heart,
            thumbs_up,
            thumbs_down,
        }
    }

    /// Count for a single kind
    pub fn get(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Heart => self.heart,
            ReactionKind::ThumbsUp => self.thumbs_up,
            ReactionKind::ThumbsDown => self.thumbs_down,
        }
    }

    fn slot_mut(&mut self, kind: ReactionKind) -> &mut u32 {
        match kind {
            ReactionKind::Heart => &mut self.heart,
            ReactionKind::ThumbsUp => &mut self.thumbs_up,
            ReactionKind::ThumbsDown => &mut self.thumbs_down,
        }
    }

    fn increment(&mut self, kind: ReactionKind) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(1);
    }

    fn decrement(&mut self, kind: ReactionKind) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_sub(1);
    }
}

/// A confirmed change of the viewing user's reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionTransition {
    pub from: Option<ReactionKind>,
    pub to: ReactionKind,
}

/// Reaction state of one card for the viewing user
///
/// `active` is the only record of which button is pressed; at most one kind
/// can be active because it is a single `Option`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionState {
    counts: ReactionCounts,
    active: Option<ReactionKind>,
}

impl ReactionState {
    /// Create a state from server counts and the user's current reaction
    pub fn new(counts: ReactionCounts, active: Option<ReactionKind>) -> Self {
        Self { counts, active }
    }

    pub fn counts(&self) -> ReactionCounts {
        self.counts
    }

    pub fn active(&self) -> Option<ReactionKind> {
        self.active
    }

    #[inline]
    pub fn is_active(&self, kind: ReactionKind) -> bool {
        self.active == Some(kind)
    }

    /// Count displayed for a kind
    pub fn count(&self, kind: ReactionKind) -> u32 {
        self.counts.get(kind)
    }

    /// Transition to `next`, returning `None` when it is already active.
    ///
    /// The previous kind loses one count and `next` gains one within this
    /// single call.
    pub fn select(&mut self, next: ReactionKind) -> Option<ReactionTransition> {
        if self.active == Some(next) {
            return None;
        }
        let from = self.active;
        if let Some(previous) = from {
            self.counts.decrement(previous);
        }
        self.counts.increment(next);
        self.active = Some(next);
        Some(ReactionTransition { from, to: next })
    }

    /// Move the active kind to what the server reports, adjusting counts the
    /// same way a click would. Returns whether anything changed.
    pub fn sync_with(&mut self, server: Option<ReactionKind>) -> bool {
        match server {
            Some(kind) => self.select(kind).is_some(),
            None => match self.active.take() {
                Some(previous) => {
                    self.counts.decrement(previous);
                    true
                }
                None => false,
            },
        }
    }
}
