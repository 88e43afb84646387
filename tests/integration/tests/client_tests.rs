//! HTTP client integration tests
//!
//! Drive `HttpFeedApi` against the in-process stub server.
//!
//! Run with: cargo test -p integration-tests --test client_tests

use feed_client::HttpFeedApi;
use feed_core::{FeedApi, NewComment, PostId, ReactionKind};
use integration_tests::{sample_feed, StubState, TestServer};
use serde_json::json;

// ============================================================================
// Posts
// ============================================================================

#[tokio::test]
async fn test_list_posts_in_server_order() {
    let server = TestServer::start(sample_feed()).await.unwrap();
    let api = HttpFeedApi::new(&server.api_config(false)).unwrap();

    let posts = api.list_posts().await.unwrap();
    let ids: Vec<&str> = posts.iter().map(|p| p.post_id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);

    assert_eq!(posts[0].image_url(), Some("/uploads/trail.jpg"));
    assert_eq!(posts[2].image_url(), None);
    assert_eq!(posts[1].reactions.get(ReactionKind::ThumbsDown), 2);
    assert_eq!(posts[1].reactions.get(ReactionKind::Heart), 0);
    assert_eq!(posts[0].comments.len(), 2);
}

#[tokio::test]
async fn test_malformed_posts_payload() {
    let server = TestServer::start(vec![json!({ "title": "no id" })]).await.unwrap();
    let api = HttpFeedApi::new(&server.api_config(false)).unwrap();

    let err = api.list_posts().await.unwrap_err();
    assert_eq!(err.code(), "MALFORMED_RESPONSE");
    assert!(!err.is_retryable());
}

// ============================================================================
// Reactions
// ============================================================================

#[tokio::test]
async fn test_user_reaction_values() {
    let mut state = StubState::default();
    state.user_reactions.insert("1".to_string(), json!("heart"));
    state.user_reactions.insert("2".to_string(), json!("null"));
    state.user_reactions.insert("3".to_string(), json!("laugh"));
    let server = TestServer::start_with_state(state).await.unwrap();
    let api = HttpFeedApi::new(&server.api_config(true)).unwrap();

    assert_eq!(
        api.user_reaction(&PostId::from(1)).await.unwrap(),
        Some(ReactionKind::Heart)
    );
    assert_eq!(api.user_reaction(&PostId::from(2)).await.unwrap(), None);
    assert_eq!(api.user_reaction(&PostId::from(4)).await.unwrap(), None);

    let err = api.user_reaction(&PostId::from(3)).await.unwrap_err();
    assert_eq!(err.code(), "MALFORMED_RESPONSE");
}

#[tokio::test]
async fn test_session_cookie_required() {
    let server = TestServer::start(vec![]).await.unwrap();
    let api = HttpFeedApi::new(&server.api_config(false)).unwrap();

    let err = api.user_reaction(&PostId::from(1)).await.unwrap_err();
    assert_eq!(err.code(), "UNEXPECTED_STATUS");
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_set_reaction_sends_form() {
    let server = TestServer::start(vec![]).await.unwrap();
    let api = HttpFeedApi::new(&server.api_config(true)).unwrap();

    api.set_reaction(ReactionKind::ThumbsUp, &PostId::from(7))
        .await
        .unwrap();

    let writes = server.with_state(|s| s.reaction_writes.clone());
    assert_eq!(writes, [("thumbsUp".to_string(), "7".to_string())]);
    assert_eq!(
        api.user_reaction(&PostId::from(7)).await.unwrap(),
        Some(ReactionKind::ThumbsUp)
    );
}

#[tokio::test]
async fn test_set_reaction_rejected_status() {
    let server = TestServer::start_with_state(StubState {
        reaction_status: Some("error".to_string()),
        ..StubState::default()
    })
    .await
    .unwrap();
    let api = HttpFeedApi::new(&server.api_config(true)).unwrap();

    let err = api
        .set_reaction(ReactionKind::Heart, &PostId::from(1))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "REACTION_REJECTED");
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn test_submit_comment_sends_text_as_typed() {
    let server = TestServer::start(vec![]).await.unwrap();
    let api = HttpFeedApi::new(&server.api_config(true)).unwrap();

    api.submit_comment(&NewComment::new(PostId::from(3), "  nice one "))
        .await
        .unwrap();

    let comments = server.with_state(|s| s.comments.clone());
    assert_eq!(comments, [("3".to_string(), "  nice one ".to_string())]);
}
