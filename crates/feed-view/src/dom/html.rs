//! HTML serialization
//!
//! Text is stored unescaped in the tree and escaped exactly once, here.

use std::fmt::{self, Write};

use super::node::{Element, Node};

// Elements that never have children or a closing tag
const VOID_ELEMENTS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

/// Escape text content
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape a double-quoted attribute value
pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;").replace('\'', "&#39;")
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => fmt::Display::fmt(element, f),
            Self::Text(text) => f.write_str(&escape_text(text)),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag())?;
        if let Some(id) = self.id() {
            write!(f, " id=\"{}\"", escape_attribute(id))?;
        }
        if !self.classes().is_empty() {
            write!(f, " class=\"{}\"", escape_attribute(&self.classes().join(" ")))?;
        }
        for (name, value) in self.attributes() {
            if value.is_empty() {
                write!(f, " {name}")?;
            } else {
                write!(f, " {name}=\"{}\"", escape_attribute(value))?;
            }
        }
        f.write_char('>')?;

        if VOID_ELEMENTS.contains(&self.tag()) {
            return Ok(());
        }
        for child in self.children() {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag())
    }
}
