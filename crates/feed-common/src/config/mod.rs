//! Configuration structs

mod app_config;

pub use app_config::{
    ApiConfig, AppConfig, AppSettings, ConfigError, Environment, RenderConfig,
    DEFAULT_AVATAR_URL_TEMPLATE,
};
