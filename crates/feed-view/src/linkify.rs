//! Link annotation
//!
//! Rewrites every `http://` / `https://` run of non-whitespace characters in
//! text nodes as an anchor opening in a new browsing context.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dom::{Element, Node};

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("URL pattern is a valid regex"));

/// Anchor element for a URL
pub fn link(url: &str) -> Element {
    Element::new("a")
        .with_class("link link-primary")
        .with_attr("href", url)
        .with_attr("target", "_blank")
        .with_attr("rel", "noopener noreferrer")
        .with_text(url)
}

/// Split text into text and anchor nodes; every URL occurrence becomes a link
pub fn linkify(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut last = 0;
    for found in URL_PATTERN.find_iter(text) {
        if found.start() > last {
            nodes.push(Node::Text(text[last..found.start()].to_string()));
        }
        nodes.push(Node::Element(link(found.as_str())));
        last = found.end();
    }
    if last < text.len() {
        nodes.push(Node::Text(text[last..].to_string()));
    }
    nodes
}

/// Annotate the text of an element in place, returning the number of links
/// created. Existing anchors are left alone.
pub fn annotate_links(element: &mut Element) -> usize {
    let mut created = 0;
    let children = std::mem::take(element.children_mut());
    for child in children {
        match child {
            Node::Text(text) => {
                let nodes = linkify(&text);
                created += nodes.iter().filter(|node| node.as_element().is_some()).count();
                element.children_mut().extend(nodes);
            }
            Node::Element(mut inner) => {
                if inner.tag() != "a" {
                    created += annotate_links(&mut inner);
                }
                element.append(inner);
            }
        }
    }
    created
}
