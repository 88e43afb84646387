//! Page document - the body tree plus head metadata

use feed_core::DomainError;

use super::html::escape_text;
use super::node::Element;

/// A full HTML page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    body: Element,
}

impl Document {
    /// Empty page with a given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Element::new("body"),
        }
    }

    /// Page with a single feed container `div#<container_id>`
    pub fn with_container(title: impl Into<String>, container_id: &str) -> Self {
        let mut document = Self::new(title);
        document.body.append(
            Element::new("main")
                .with_class("container mx-auto p-4")
                .with_child(
                    Element::new("div")
                        .with_id(container_id)
                        .with_class("columns-1 md:columns-2 xl:columns-3 gap-4"),
                ),
        );
        document
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    /// Mutable lookup that reports a missing anchor as an error
    pub fn require_mut(&mut self, id: &str) -> Result<&mut Element, DomainError> {
        self.body
            .find_by_id_mut(id)
            .ok_or_else(|| DomainError::MissingAnchor(id.to_string()))
    }

    /// Append an element as the last child of the element with `container_id`
    pub fn append_to(&mut self, container_id: &str, element: Element) -> Result<(), DomainError> {
        self.require_mut(container_id)?.append(element);
        Ok(())
    }

    /// Serialize the page
    pub fn to_html(&self) -> String {
        let mut head = String::from("<meta charset=\"utf-8\">");
        head.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
        head.push_str(&format!("<title>{}</title>", escape_text(&self.title)));
        format!("<!DOCTYPE html>\n<html lang=\"en\"><head>{head}</head>{}</html>\n", self.body)
    }
}
