//! Error types for the polling bot.
//!
//! [`PollError`] covers every failure mode of one poll iteration, so the loop
//! can route any of them into the same diagnostic-notification path.

use thiserror::Error;

/// Top-level error for the bot (config, endpoint, response shape, transport).
#[derive(Error, Debug)]
pub enum PollError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Endpoint {url} unreachable: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Endpoint {url} answered with status {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed JSON in response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    Shape(String),

    #[error("Missing '{0}' key in response")]
    MissingField(&'static str),

    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for bot operations; uses [`PollError`].
pub type Result<T> = std::result::Result<T, PollError>;
