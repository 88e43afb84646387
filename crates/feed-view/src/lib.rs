//! # feed-view
//!
//! Application layer of the feed renderer: the element tree, link
//! annotation, card building, the reaction client and the feed loader.

pub mod avatar;
pub mod card;
pub mod dom;
pub mod linkify;
pub mod loader;
pub mod page;
pub mod reaction_client;

#[cfg(test)]
mod testing;

// Re-export commonly used types at crate root
pub use avatar::AvatarService;
pub use card::{reactions_region, CardBuilder, CardOptions};
pub use dom::{Document, Element, Node};
pub use linkify::{annotate_links, linkify};
pub use loader::{FeedLoader, LoadReport};
pub use page::{CardView, FeedPage, Notice, CONTAINER_ID};
pub use reaction_client::{ReactionClient, ReactionOutcome};
