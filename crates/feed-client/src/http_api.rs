//! HTTP feed API
//!
//! Talks to the four feed endpoints. Session-scoped calls carry the
//! `token` cookie that the server issued at login.

use std::time::Duration;

use async_trait::async_trait;
use feed_common::ApiConfig;
use feed_core::{ApiResult, DomainError, FeedApi, NewComment, Post, PostId, ReactionKind};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::error::ClientError;
use crate::wire::{StatusResponse, UserReactionResponse};

const POSTS: &str = "/api/posts";
const USER_REACTION: &str = "/api/userreaction";
const REACTION: &str = "/api/reaction";
const COMMENT: &str = "/api/comment";

/// reqwest-backed implementation of [`FeedApi`]
#[derive(Debug, Clone)]
pub struct HttpFeedApi {
    client: Client,
    config: ApiConfig,
}

impl HttpFeedApi {
    /// Build a client for the configured server and session
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.session_token {
            let cookie = HeaderValue::from_str(&format!("token={token}"))
                .map_err(|_| ClientError::InvalidSessionToken)?;
            headers.insert(COOKIE, cookie);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    async fn send(
        request: RequestBuilder,
        endpoint: &'static str,
    ) -> Result<Response, ClientError> {
        let response = request
            .send()
            .await
            .map_err(ClientError::transport(endpoint))?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, status = status.as_u16(), "Feed server returned an error status");
            return Err(ClientError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(
        request: RequestBuilder,
        endpoint: &'static str,
    ) -> Result<T, ClientError> {
        let body = Self::send(request, endpoint)
            .await?
            .text()
            .await
            .map_err(ClientError::transport(endpoint))?;

        serde_json::from_str(&body).map_err(|e| ClientError::decode(endpoint, e))
    }
}

#[async_trait]
impl FeedApi for HttpFeedApi {
    #[instrument(skip(self))]
    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        let posts: Vec<Post> = Self::fetch_json(self.client.get(self.url(POSTS)), POSTS).await?;
        debug!(count = posts.len(), "Fetched posts");
        Ok(posts)
    }

    #[instrument(skip_all, fields(post_id = %post_id))]
    async fn user_reaction(&self, post_id: &PostId) -> ApiResult<Option<ReactionKind>> {
        let request = self
            .client
            .get(self.url(USER_REACTION))
            .query(&[("post_id", post_id.as_str())]);

        let response: UserReactionResponse = Self::fetch_json(request, USER_REACTION).await?;
        let kind = response
            .into_kind()
            .map_err(|message| ClientError::decode(USER_REACTION, message))?;
        debug!(kind = ?kind, "Fetched user reaction");
        Ok(kind)
    }

    #[instrument(skip_all, fields(post_id = %post_id, kind = %kind))]
    async fn set_reaction(&self, kind: ReactionKind, post_id: &PostId) -> ApiResult<()> {
        let request = self
            .client
            .post(self.url(REACTION))
            .form(&[("reaction", kind.as_str()), ("post_id", post_id.as_str())]);

        let response: StatusResponse = Self::fetch_json(request, REACTION).await?;
        if !response.is_ok() {
            return Err(DomainError::ReactionRejected(response.status));
        }
        debug!("Reaction stored");
        Ok(())
    }

    #[instrument(skip_all, fields(post_id = %comment.post_id))]
    async fn submit_comment(&self, comment: &NewComment) -> ApiResult<()> {
        let comment = comment.clone().validated()?;

        // The server answers with a redirect back to the feed; reqwest
        // follows it, so success here means the final page loaded.
        Self::send(self.client.post(self.url(COMMENT)).form(&comment), COMMENT).await?;
        debug!("Comment submitted");
        Ok(())
    }
}
