//! Feed renderer entry point
//!
//! Run with:
//! ```bash
//! cargo run -p feed-render -- render -o feed.html
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`), with
//! command-line flags taking precedence.

use clap::Parser;
use feed_common::{try_init_tracing_with_config, AppConfig, AppError, TracingConfig};
use feed_render::Cli;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::from_env_with_overrides(&cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(AppError::from(e).exit_code());
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        base_url = %config.api.base_url,
        "Configuration loaded"
    );

    if let Err(e) = feed_render::run(cli, config).await {
        error!(error = %e, code = e.error_code(), retryable = e.is_retryable(), "Command failed");
        std::process::exit(e.exit_code());
    }
}
