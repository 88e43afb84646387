//! Card builder
//!
//! Turns one post and its reaction state into the card subtree. Building is
//! pure: fetching the initial reaction state happens before, and mounting the
//! card happens after, in [`crate::page::FeedPage`].

use feed_common::RenderConfig;
use feed_core::{Comment, DomainError, Post, PostId, ReactionKind, ReactionState};

use crate::avatar::AvatarService;
use crate::dom::Element;
use crate::linkify::annotate_links;

/// Id of the reactions region inside every card
pub const REACTIONS_ID: &str = "reactions";

/// Class carried by every rendered comment row
pub const COMMENT_ROW_CLASS: &str = "comment";

/// Class of the placeholder shown when a post has no comments
pub const NO_COMMENTS_CLASS: &str = "no-comments";

/// Class added to the pressed reaction button
pub const ACTIVE_CLASS: &str = "btn-active";

/// Capability flags of the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOptions {
    /// Render the reactions region
    pub reactions: bool,
    /// Run the link annotator over comment bodies too
    pub linkify_comments: bool,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            reactions: true,
            linkify_comments: false,
        }
    }
}

impl From<&RenderConfig> for CardOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            reactions: config.reactions_enabled,
            linkify_comments: config.linkify_comments,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardBuilder {
    avatars: AvatarService,
    options: CardOptions,
}

impl CardBuilder {
    pub fn new(avatars: AvatarService, options: CardOptions) -> Self {
        Self { avatars, options }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(AvatarService::from_config(config), CardOptions::from(config))
    }

    pub fn options(&self) -> CardOptions {
        self.options
    }

    /// Build the full card for a post
    pub fn build(&self, post: &Post, reactions: &ReactionState) -> Result<Element, DomainError> {
        let mut card = Element::new("div")
            .with_id(post.post_id.as_str())
            .with_class("card w-full bg-base-100 shadow-xl break-inside-avoid-column mb-4")
            .with_child(self.owner_block(&post.email, &post.datetime, "text-sm"));

        if let Some(url) = post.image_url() {
            card.append(
                Element::new("figure")
                    .with_class("px-10 pt-10")
                    .with_child(Element::new("img").with_class("rounded-xl").with_attr("src", url)),
            );
        }

        let mut text = Element::new("p")
            .with_class("break-words whitespace-pre-line")
            .with_text(post.decoded_content()?);
        annotate_links(&mut text);

        let mut body = Element::new("div")
            .with_class("card-body")
            .with_child(Element::new("h2").with_class("card-title").with_text(post.title.as_str()))
            .with_child(text);

        if self.options.reactions {
            body.append(reactions_region(&post.post_id, reactions));
        }

        body.append(Element::new("div").with_class("divider").with_text("Comments"));
        body.append(self.comments_section(&post.comments)?);
        body.append(comment_form(&post.post_id));

        card.append(body);
        Ok(card)
    }

    fn owner_block(&self, email: &str, datetime: &str, date_class: &str) -> Element {
        Element::new("div")
            .with_class("flex gap-4")
            .with_child(self.avatar(email))
            .with_child(details(email, datetime, date_class))
    }

    fn avatar(&self, email: &str) -> Element {
        Element::new("div").with_class("avatar").with_child(
            Element::new("div").with_class("w-12 rounded-btn").with_child(
                Element::new("img")
                    .with_attr("src", self.avatars.url_for(email))
                    .with_attr("alt", "Avatar"),
            ),
        )
    }

    fn comments_section(&self, comments: &[Comment]) -> Result<Element, DomainError> {
        let mut section = Element::new("div").with_class("comments w-full flex flex-col gap-4");

        if comments.is_empty() {
            section.append(
                Element::new("div")
                    .with_class(NO_COMMENTS_CLASS)
                    .with_class("text-center text-gray-500")
                    .with_text("No comments yet"),
            );
            return Ok(section);
        }

        for comment in comments {
            section.append(self.comment_row(comment)?);
        }
        Ok(section)
    }

    fn comment_row(&self, comment: &Comment) -> Result<Element, DomainError> {
        let mut text = Element::new("div")
            .with_class("break-words whitespace-pre-line")
            .with_text(comment.decoded_content()?);
        if self.options.linkify_comments {
            annotate_links(&mut text);
        }

        Ok(Element::new("div")
            .with_class(COMMENT_ROW_CLASS)
            .with_class("flex gap-4")
            .with_child(self.avatar(&comment.email))
            .with_child(
                details(&comment.email, &comment.datetime, "text-xs")
                    .with_class("grow")
                    .with_child(text),
            ))
    }
}

/// Owner email over a muted timestamp
fn details(email: &str, datetime: &str, date_class: &str) -> Element {
    Element::new("div")
        .with_class("flex flex-col")
        .with_child(Element::new("div").with_class("font-bold").with_text(email))
        .with_child(
            Element::new("div")
                .with_class(date_class)
                .with_class("text-gray-500")
                .with_text(datetime),
        )
}

/// The reactions region of a card: three buttons in fixed order, each bound to
/// its kind and the post it was built for
pub fn reactions_region(post_id: &PostId, state: &ReactionState) -> Element {
    Element::new("div")
        .with_id(REACTIONS_ID)
        .with_class("flex gap-2")
        .with_children(
            ReactionKind::ALL
                .iter()
                .map(|kind| reaction_button(post_id, *kind, state)),
        )
}

fn reaction_button(post_id: &PostId, kind: ReactionKind, state: &ReactionState) -> Element {
    let active = state.is_active(kind);
    let mut button = Element::new("button")
        .with_class("btn btn-sm btn-ghost gap-2")
        .with_attr("type", "button")
        .with_attr("data-reaction", kind.as_str())
        .with_attr("data-post-id", post_id.as_str())
        .with_attr("aria-pressed", if active { "true" } else { "false" })
        .with_child(Element::new("span").with_text(kind.glyph()))
        .with_child(
            Element::new("span")
                .with_class("badge")
                .with_text(state.count(kind).to_string()),
        );
    if active {
        button.add_class(ACTIVE_CLASS);
    }
    button
}

/// The navigation-style comment form
fn comment_form(post_id: &PostId) -> Element {
    Element::new("form")
        .with_class("card-actions justify-end mt-6")
        .with_attr("action", "/api/comment")
        .with_attr("method", "POST")
        .with_child(
            Element::new("input")
                .with_attr("type", "hidden")
                .with_attr("name", "post_id")
                .with_attr("value", post_id.as_str()),
        )
        .with_child(
            Element::new("input")
                .with_class("input input-bordered grow")
                .with_attr("name", "content")
                .with_attr("placeholder", "Add a comment")
                .with_attr("required", ""),
        )
        .with_child(
            Element::new("button")
                .with_class("btn btn-primary grow lg:grow-0")
                .with_attr("type", "submit")
                .with_text("Comment"),
        )
}
