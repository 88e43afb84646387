//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::PostId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Missing DOM anchor: {0}")]
    MissingAnchor(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown reaction kind: {0}")]
    InvalidReactionKind(String),

    #[error("Could not decode content: {0}")]
    ContentDecode(String),

    // =========================================================================
    // Remote Errors
    // =========================================================================
    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Unexpected status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Reaction rejected by server: {0}")]
    ReactionRejected(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get a stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::MissingAnchor(_) => "MISSING_ANCHOR",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidReactionKind(_) => "INVALID_REACTION_KIND",
            Self::ContentDecode(_) => "CONTENT_DECODE",

            // Remote
            Self::TransportError(_) => "TRANSPORT_ERROR",
            Self::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
            Self::ReactionRejected(_) => "REACTION_REJECTED",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PostNotFound(_) | Self::MissingAnchor(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidReactionKind(_) | Self::ContentDecode(_)
        )
    }

    /// Check if repeating the same request may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::TransportError(_) => true,
            Self::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
