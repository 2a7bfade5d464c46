//! Error types for the interactions webhook.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use discord_client::DiscordError;
use joke_client::JokeError;
use serde::Serialize;
use thiserror::Error;

/// Bot error types.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("Bad request signature")]
    InvalidSignature,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Malformed interaction: {0}")]
    MalformedInteraction(String),

    #[error("Not Found")]
    NotFound,

    #[error("Discord error: {0}")]
    Discord(#[from] DiscordError),

    #[error("Joke provider error: {0}")]
    Joke(#[from] JokeError),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Duplicate command name in catalog: {0}")]
    DuplicateCommand(String),

    #[error("Registered commands do not match the catalog: expected {expected:?}, got {actual:?}")]
    RegistrationMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

impl BotError {
    /// Failure of an outbound call made while handling a command.
    pub fn is_upstream(&self) -> bool {
        matches!(self, BotError::Discord(_) | BotError::Joke(_))
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for BotError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            BotError::InvalidSignature => (StatusCode::UNAUTHORIZED, "INVALID_SIGNATURE"),
            BotError::UnknownCommand(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_COMMAND"),
            BotError::MalformedInteraction(_) => {
                (StatusCode::BAD_REQUEST, "MALFORMED_INTERACTION")
            }
            BotError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            BotError::Discord(_) => (StatusCode::BAD_GATEWAY, "DISCORD_API_ERROR"),
            BotError::Joke(_) => (StatusCode::BAD_GATEWAY, "JOKE_PROVIDER_ERROR"),
            BotError::InvalidPublicKey(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INVALID_PUBLIC_KEY")
            }
            BotError::DuplicateCommand(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DUPLICATE_COMMAND")
            }
            BotError::RegistrationMismatch { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "REGISTRATION_MISMATCH")
            }
            BotError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for BotError {
    fn from(e: serde_json::Error) -> Self {
        BotError::MalformedInteraction(e.to_string())
    }
}

/// Result type alias for bot errors.
pub type BotResult<T> = Result<T, BotError>;
