//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use feed_core::{PostId, ReactionKind};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Render the social feed to a static HTML page")]
pub struct Cli {
    /// Feed server origin (overrides FEED_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Session token sent as the `token` cookie (overrides FEED_SESSION_TOKEN)
    #[arg(long, global = true)]
    pub session_token: Option<String>,

    /// Where to write the page, `-` for stdout (overrides RENDER_OUTPUT_PATH)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Load the feed and write the rendered page
    Render,

    /// React to a post, then write the updated page
    React {
        post_id: String,
        /// heart, thumbsUp or thumbsDown
        #[arg(value_parser = parse_kind)]
        kind: ReactionKind,
    },

    /// Submit a comment on a post
    Comment { post_id: String, content: String },
}

impl Cli {
    /// Configuration variables set from flags
    pub fn overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();
        if let Some(url) = &self.base_url {
            overrides.push(("FEED_BASE_URL", url.clone()));
        }
        if let Some(token) = &self.session_token {
            overrides.push(("FEED_SESSION_TOKEN", token.clone()));
        }
        if let Some(output) = &self.output {
            overrides.push(("RENDER_OUTPUT_PATH", output.display().to_string()));
        }
        overrides
    }
}

impl Command {
    pub fn post_id(&self) -> Option<PostId> {
        match self {
            Self::Render => None,
            Self::React { post_id, .. } | Self::Comment { post_id, .. } => {
                Some(PostId::new(post_id.as_str()))
            }
        }
    }
}

fn parse_kind(raw: &str) -> Result<ReactionKind, String> {
    raw.parse().map_err(|e: feed_core::DomainError| e.to_string())
}
