//! End-to-end rendering tests
//!
//! Load the stub feed through the real HTTP client into a page, click
//! reactions, and run the CLI entry point.
//!
//! Run with: cargo test -p integration-tests --test render_tests

use std::sync::Arc;

use feed_client::HttpFeedApi;
use feed_common::RenderConfig;
use feed_core::{FeedApi, PostId, ReactionKind};
use feed_render::{Cli, Command};
use feed_view::{CardBuilder, FeedLoader, FeedPage, ReactionClient, ReactionOutcome, CONTAINER_ID};
use integration_tests::{sample_feed, StubState, TestServer};
use serde_json::json;

async fn loaded_page(server: &TestServer) -> FeedPage {
    let api: Arc<dyn FeedApi> = Arc::new(HttpFeedApi::new(&server.api_config(true)).unwrap());
    let mut page = FeedPage::new(
        "Feed",
        CardBuilder::from_config(&RenderConfig::default()),
        ReactionClient::new(api.clone()),
    );
    FeedLoader::new(api, 2).load(&mut page).await.unwrap();
    page
}

fn active_kinds(page: &FeedPage, post_id: &str) -> Vec<String> {
    page.document()
        .element_by_id(post_id)
        .unwrap()
        .find_by_class("btn-active")
        .into_iter()
        .filter_map(|b| b.attr("data-reaction").map(str::to_string))
        .collect()
}

// ============================================================================
// Loading
// ============================================================================

#[tokio::test]
async fn test_render_sample_feed() {
    let mut state = StubState {
        posts: sample_feed(),
        ..StubState::default()
    };
    state.user_reactions.insert("1".to_string(), json!("heart"));
    let server = TestServer::start_with_state(state).await.unwrap();

    let page = loaded_page(&server).await;
    assert_eq!(
        page.card_ids(),
        [PostId::from(1), PostId::from(2), PostId::from(3)]
    );
    assert_eq!(server.with_state(|s| s.user_reaction_reads), 3);

    let container = page.document().element_by_id(CONTAINER_ID).unwrap();
    let first = container.find_by_id("1").unwrap();
    // Two identical URLs in the body, none in the owner block; comments are not linkified
    let anchors = first.find_by_tag("a");
    assert_eq!(anchors.len(), 2);
    assert!(anchors
        .iter()
        .all(|a| a.attr("href") == Some("https://maps.example/trail")));
    assert_eq!(first.find_by_class("comment").len(), 2);
    assert_eq!(first.find_by_tag("figure").len(), 1);
    assert_eq!(active_kinds(&page, "1"), ["heart"]);

    let html = page.to_html();
    assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt; claims"));
    assert!(html.contains("100%25 sure"));
    assert!(html.contains("Hello World"));
    assert!(html.contains("No comments yet"));
}

#[tokio::test]
async fn test_render_without_session_falls_back() {
    let server = TestServer::start(sample_feed()).await.unwrap();
    let api: Arc<dyn FeedApi> = Arc::new(HttpFeedApi::new(&server.api_config(false)).unwrap());
    let mut page = FeedPage::new(
        "Feed",
        CardBuilder::default(),
        ReactionClient::new(api.clone()),
    );

    let report = FeedLoader::new(api, 4).load(&mut page).await.unwrap();
    assert_eq!(report.inserted.len(), 3);
    assert!(report.failed.is_empty());
    assert!(active_kinds(&page, "1").is_empty());
}

// ============================================================================
// Reactions
// ============================================================================

#[tokio::test]
async fn test_click_switches_reaction() {
    let mut state = StubState {
        posts: sample_feed(),
        ..StubState::default()
    };
    state.user_reactions.insert("1".to_string(), json!("heart"));
    let server = TestServer::start_with_state(state).await.unwrap();
    let mut page = loaded_page(&server).await;
    let id = PostId::from(1);

    let outcome = page.click_reaction(&id, ReactionKind::ThumbsUp).await.unwrap();
    assert!(matches!(outcome, ReactionOutcome::Applied(_)));
    assert_eq!(active_kinds(&page, "1"), ["thumbsUp"]);

    let view = page.card(&id).unwrap();
    assert_eq!(view.reactions.count(ReactionKind::Heart), 2);
    assert_eq!(view.reactions.count(ReactionKind::ThumbsUp), 2);

    // Re-clicking the active kind sends nothing
    let writes = server.with_state(|s| s.reaction_writes.len());
    let outcome = page.click_reaction(&id, ReactionKind::ThumbsUp).await.unwrap();
    assert_eq!(outcome, ReactionOutcome::AlreadyActive);
    assert_eq!(server.with_state(|s| s.reaction_writes.len()), writes);
}

#[tokio::test]
async fn test_rejected_click_keeps_region() {
    let server = TestServer::start_with_state(StubState {
        posts: sample_feed(),
        reaction_status: Some("denied".to_string()),
        ..StubState::default()
    })
    .await
    .unwrap();
    let mut page = loaded_page(&server).await;
    let before = page.to_html();

    let err = page
        .click_reaction(&PostId::from(2), ReactionKind::Heart)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "REACTION_REJECTED");
    assert_eq!(page.to_html(), before);
    assert_eq!(page.take_notices().len(), 1);
}

#[tokio::test]
async fn test_failed_write_that_landed_is_reconciled() {
    let server = TestServer::start_with_state(StubState {
        posts: sample_feed(),
        fail_reaction_after_store: true,
        ..StubState::default()
    })
    .await
    .unwrap();
    let mut page = loaded_page(&server).await;

    let outcome = page
        .click_reaction(&PostId::from(3), ReactionKind::ThumbsDown)
        .await
        .unwrap();
    assert!(matches!(outcome, ReactionOutcome::Reconciled(_)));
    assert_eq!(active_kinds(&page, "3"), ["thumbsDown"]);
    assert!(page.take_notices().is_empty());
}

// ============================================================================
// CLI
// ============================================================================

#[tokio::test]
async fn test_cli_render_writes_page() {
    let server = TestServer::start(sample_feed()).await.unwrap();
    let output = std::env::temp_dir().join(format!("feed-render-{}.html", server.addr.port()));
    let config = server.app_config(&output.display().to_string());

    let cli = Cli {
        base_url: None,
        session_token: None,
        output: None,
        command: Command::Render,
    };
    feed_render::run(cli, config).await.unwrap();

    let html = std::fs::read_to_string(&output).unwrap();
    std::fs::remove_file(&output).ok();
    assert!(html.starts_with("<!DOCTYPE html>"));
    let first = html.find(r#"id="1""#).unwrap();
    let second = html.find(r#"id="2""#).unwrap();
    let third = html.find(r#"id="3""#).unwrap();
    assert!(first < second && second < third);
}

#[tokio::test]
async fn test_cli_comment() {
    let server = TestServer::start(vec![]).await.unwrap();
    let cli = Cli {
        base_url: None,
        session_token: None,
        output: None,
        command: Command::Comment {
            post_id: "2".to_string(),
            content: "hello".to_string(),
        },
    };
    feed_render::run(cli, server.app_config("-")).await.unwrap();
    assert_eq!(
        server.with_state(|s| s.comments.clone()),
        [("2".to_string(), "hello".to_string())]
    );
}

#[tokio::test]
async fn test_cli_react_unknown_post() {
    let server = TestServer::start(sample_feed()).await.unwrap();
    let output = std::env::temp_dir().join(format!("feed-react-{}.html", server.addr.port()));
    let cli = Cli {
        base_url: None,
        session_token: None,
        output: None,
        command: Command::React {
            post_id: "42".to_string(),
            kind: ReactionKind::Heart,
        },
    };
    let err = feed_render::run(cli, server.app_config(&output.display().to_string()))
        .await
        .unwrap_err();
    std::fs::remove_file(&output).ok();
    assert_eq!(err.error_code(), "UNKNOWN_POST");
    assert_eq!(err.exit_code(), 66);
}
