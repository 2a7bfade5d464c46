//! Discord client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscordError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        status: u16,
        code: Option<u64>,
        message: String,
    },
}
