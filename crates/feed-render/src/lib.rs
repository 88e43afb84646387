//! # feed-render
//!
//! Command-line front end: loads the feed from the server, renders it and
//! writes the page, or performs a single reaction / comment action.

pub mod cli;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use feed_client::HttpFeedApi;
use feed_common::{AppConfig, AppError, AppResult};
use feed_core::{FeedApi, NewComment, PostId};
use feed_view::{CardBuilder, FeedLoader, FeedPage, ReactionClient};
use tracing::{info, warn};

pub use cli::{Cli, Command};

/// Run one CLI command against the configured server
pub async fn run(cli: Cli, config: AppConfig) -> AppResult<()> {
    let client = HttpFeedApi::new(&config.api).map_err(AppError::internal)?;
    let api: Arc<dyn FeedApi> = Arc::new(client);

    match &cli.command {
        Command::Render => {
            let page = load_page(&config, api).await?;
            write_page(&page, &config.render.output_path)?;
        }
        Command::React { kind, .. } => {
            let post_id = post_id(&cli.command)?;
            let mut page = load_page(&config, api).await?;
            let outcome = page.click_reaction(&post_id, *kind).await;
            for notice in page.take_notices() {
                warn!(code = notice.code, "{notice}");
            }
            info!(post_id = %post_id, outcome = ?outcome.as_ref().ok(), "Reaction handled");
            write_page(&page, &config.render.output_path)?;
            outcome?;
        }
        Command::Comment { content, .. } => {
            let comment = NewComment::new(post_id(&cli.command)?, content);
            api.submit_comment(&comment).await?;
            info!(post_id = %comment.post_id, "Comment submitted");
        }
    }
    Ok(())
}

fn post_id(command: &Command) -> AppResult<PostId> {
    command
        .post_id()
        .filter(|id| !id.as_str().trim().is_empty())
        .ok_or_else(|| AppError::invalid_input("post id is required"))
}

/// Load the whole feed into a fresh page
pub async fn load_page(config: &AppConfig, api: Arc<dyn FeedApi>) -> AppResult<FeedPage> {
    let mut page = FeedPage::new(
        &config.app.name,
        CardBuilder::from_config(&config.render),
        ReactionClient::new(api.clone()),
    );
    let report = FeedLoader::new(api, config.render.max_concurrent_builds)
        .load(&mut page)
        .await?;

    if !report.failed.is_empty() {
        warn!(failed = report.failed.len(), "Some cards were skipped");
    }
    Ok(page)
}

/// Write the page to a file, or to stdout when the path is `-`
pub fn write_page(page: &FeedPage, path: &Path) -> AppResult<()> {
    let html = page.to_html();
    if path == Path::new("-") {
        std::io::stdout().lock().write_all(html.as_bytes())?;
    } else {
        std::fs::write(path, html)?;
        info!(path = %path.display(), "Page written");
    }
    Ok(())
}
