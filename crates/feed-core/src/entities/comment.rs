//! Comment entities - comments attached to a post and the comment form payload

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::post::decode_content;
use crate::error::DomainError;
use crate::value_objects::PostId;

/// Comment entity, ordered as delivered by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub email: String,
    pub datetime: String,
    /// Percent-encoded body text
    pub content: String,
}

impl Comment {
    /// Body text decoded for display
    pub fn decoded_content(&self) -> Result<String, DomainError> {
        decode_content(&self.content)
    }
}

/// Fields submitted by the comment form (`POST /api/comment`)
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewComment {
    pub post_id: PostId,

    #[validate(custom(function = "not_blank", message = "Comment content is required"))]
    pub content: String,
}

// Whitespace-only input counts as empty; the text itself is sent unchanged.
fn not_blank(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl NewComment {
    pub fn new(post_id: PostId, content: impl Into<String>) -> Self {
        Self {
            post_id,
            content: content.into(),
        }
    }

    /// Validate the form, mapping failures into the domain error
    pub fn validated(self) -> Result<Self, DomainError> {
        self.validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        Ok(self)
    }
}
