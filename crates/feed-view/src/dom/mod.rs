//! Minimal document model
//!
//! Cards are rendered into an owned node tree; the page mounts them into a
//! [`Document`] and serializes it to HTML.

mod document;
mod html;
mod node;

pub use document::Document;
pub use html::{escape_attribute, escape_text};
pub use node::{Element, Node};
