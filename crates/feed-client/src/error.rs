//! Error handling for the HTTP client

use feed_core::DomainError;

/// Errors raised while talking to the feed server
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Session token contains characters not allowed in a cookie")]
    InvalidSessionToken,

    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("Unexpected response from {endpoint}: {message}")]
    Decode {
        endpoint: &'static str,
        message: String,
    },
}

impl ClientError {
    pub(crate) fn transport(endpoint: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| Self::Transport { endpoint, source }
    }

    pub(crate) fn decode(endpoint: &'static str, message: impl ToString) -> Self {
        Self::Decode {
            endpoint,
            message: message.to_string(),
        }
    }
}

/// Convert a client error into the domain error seen by the view layer
impl From<ClientError> for DomainError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Transport { .. } => DomainError::TransportError(err.to_string()),
            ClientError::Status { endpoint, status } => DomainError::UnexpectedStatus {
                status,
                endpoint: endpoint.to_string(),
            },
            ClientError::Decode { .. } => DomainError::MalformedResponse(err.to_string()),
            ClientError::Build(_) | ClientError::InvalidSessionToken => {
                DomainError::InternalError(err.to_string())
            }
        }
    }
}
