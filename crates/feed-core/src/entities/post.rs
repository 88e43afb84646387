//! Post entity - one entry of the feed as served by `GET /api/posts`

use serde::{Deserialize, Deserializer, Serialize};

use super::{Comment, ReactionCounts};
use crate::error::DomainError;
use crate::value_objects::PostId;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: PostId,
    pub email: String,
    pub datetime: String,
    pub title: String,
    /// Percent-encoded body text
    pub content: String,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub image: Option<String>,
    #[serde(default)]
    pub reactions: ReactionCounts,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Body text decoded for display
    pub fn decoded_content(&self) -> Result<String, DomainError> {
        decode_content(&self.content)
    }

    /// Image URL, if the post carries one
    #[inline]
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

/// Percent-decode a stored text body exactly once
pub fn decode_content(raw: &str) -> Result<String, DomainError> {
    urlencoding::decode(raw)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| DomainError::ContentDecode(e.to_string()))
}

// The server writes "" for posts without an image
fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
