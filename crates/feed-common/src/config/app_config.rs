//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file).

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Avatar service used when `RENDER_AVATAR_URL_TEMPLATE` is not set
pub const DEFAULT_AVATAR_URL_TEMPLATE: &str = "https://www.gravatar.com/avatar/{hash}?d=identicon";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub render: RenderConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

/// Feed server connection settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Origin of the feed server, without trailing slash
    pub base_url: String,
    /// Value of the `token` session cookie
    pub session_token: Option<String>,
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    /// Absolute URL of an endpoint path such as `/api/posts`
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Card rendering settings
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Avatar URL with `{hash}` and/or `{seed}` placeholders
    pub avatar_url_template: String,
    /// Upper bound on card builds waiting on the server at once
    pub max_concurrent_builds: usize,
    pub reactions_enabled: bool,
    pub linkify_comments: bool,
    pub output_path: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            avatar_url_template: DEFAULT_AVATAR_URL_TEMPLATE.to_string(),
            max_concurrent_builds: default_max_concurrent_builds(),
            reactions_enabled: true,
            linkify_comments: false,
            output_path: PathBuf::from(default_output_path()),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "feed-render".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_max_concurrent_builds() -> usize {
    8
}

fn default_output_path() -> &'static str {
    "feed.html"
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_overrides(&[])
    }

    /// Load configuration from environment variables, letting `overrides`
    /// (e.g. command-line flags) take precedence over the environment
    pub fn from_env_with_overrides(overrides: &[(&str, String)]) -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| {
            overrides
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.clone())
                .or_else(|| env::var(key).ok())
        })
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("FEED_BASE_URL").ok_or(ConfigError::MissingVar("FEED_BASE_URL"))?;
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue("FEED_BASE_URL", base_url));
        }

        let avatar_url_template = lookup("RENDER_AVATAR_URL_TEMPLATE")
            .unwrap_or_else(|| DEFAULT_AVATAR_URL_TEMPLATE.to_string());
        if !(avatar_url_template.contains("{hash}") || avatar_url_template.contains("{seed}")) {
            return Err(ConfigError::InvalidValue(
                "RENDER_AVATAR_URL_TEMPLATE",
                avatar_url_template,
            ));
        }

        let max_concurrent_builds = parse_var(
            &lookup,
            "RENDER_MAX_CONCURRENT_BUILDS",
            default_max_concurrent_builds(),
        )?;
        if max_concurrent_builds == 0 {
            return Err(ConfigError::InvalidValue(
                "RENDER_MAX_CONCURRENT_BUILDS",
                "0".to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: parse_var(&lookup, "APP_ENV", Environment::default())?,
            },
            api: ApiConfig {
                base_url,
                session_token: lookup("FEED_SESSION_TOKEN").filter(|t| !t.is_empty()),
                request_timeout_secs: parse_var(
                    &lookup,
                    "FEED_REQUEST_TIMEOUT_SECS",
                    default_request_timeout(),
                )?,
            },
            render: RenderConfig {
                avatar_url_template,
                max_concurrent_builds,
                reactions_enabled: parse_flag(&lookup, "RENDER_REACTIONS_ENABLED", true)?,
                linkify_comments: parse_flag(&lookup, "RENDER_LINKIFY_COMMENTS", false)?,
                output_path: lookup("RENDER_OUTPUT_PATH")
                    .map_or_else(|| PathBuf::from(default_output_path()), PathBuf::from),
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default),
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue(key, raw)),
        },
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
