//! Application error types
//!
//! Top-level error of the renderer binary.

use feed_core::DomainError;
use std::fmt;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Internal error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Process exit code for this error (sysexits-style)
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            // EX_USAGE
            Self::InvalidInput(_) => 64,
            // EX_CONFIG
            Self::Config(_) => 78,
            // EX_IOERR
            Self::Io(_) => 74,
            // EX_SOFTWARE
            Self::Internal(_) => 70,
            Self::Domain(e) => {
                if e.is_validation() {
                    65 // EX_DATAERR
                } else if e.is_not_found() {
                    66 // EX_NOINPUT
                } else {
                    69 // EX_UNAVAILABLE
                }
            }
        }
    }

    /// Get a stable error code string
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if running the command again may succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_retryable())
    }

    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(msg: impl fmt::Display) -> Self {
        Self::InvalidInput(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
