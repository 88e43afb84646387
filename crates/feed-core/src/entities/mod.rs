//! Domain entities - posts, comments and reactions

mod comment;
mod post;
mod reaction;

pub use comment::{Comment, NewComment};
pub use post::{decode_content, Post};
pub use reaction::{ReactionCounts, ReactionKind, ReactionState, ReactionTransition};
