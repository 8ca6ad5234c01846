//! Configuration assembly errors.

use std::path::PathBuf;

use docconf_nav::NavError;

/// Configuration error.
///
/// Any variant aborts configuration construction entirely; a build must not
/// proceed with an inconsistent configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Manifest file not found.
    #[error("Manifest file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Manifest field path (e.g., "`analytics.key`").
        field: String,
        /// Error message (e.g., "${`ANALYTICS_KEY`} not set").
        message: String,
    },
    /// Navigation tree violation.
    #[error("Navigation error: {0}")]
    Nav(#[from] NavError),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}
