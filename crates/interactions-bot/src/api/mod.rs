//! HTTP surface of the interactions webhook.

mod handlers;
mod middleware;

pub use handlers::*;
pub use middleware::{verify_signature, MAX_BODY_BYTES};

use crate::commands::{CommandContext, CommandRegistry};
use crate::config::Config;
use crate::error::BotResult;
use crate::signature::SignatureVerifier;
use axum::{middleware as axum_middleware, routing::get, Router};
use discord_client::DiscordClient;
use joke_client::JokeClient;
use secrecy::ExposeSecret;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Checks request signatures
    pub verifier: Arc<SignatureVerifier>,
    /// Command dispatch table
    pub commands: Arc<CommandRegistry>,
    /// Collaborators handed to command handlers
    pub context: Arc<CommandContext>,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        verifier: SignatureVerifier,
        commands: CommandRegistry,
        context: CommandContext,
    ) -> Self {
        Self {
            verifier: Arc::new(verifier),
            commands: Arc::new(commands),
            context: Arc::new(context),
        }
    }

    /// Build state and outbound clients from configuration.
    pub fn from_config(config: &Config) -> BotResult<Self> {
        let verifier = SignatureVerifier::from_hex(&config.discord.public_key)?;
        let commands = CommandRegistry::for_catalog(config.catalog.variant)?;

        let discord = DiscordClient::new(
            &config.discord.api_base_url,
            config.discord.token.expose_secret().as_str(),
            config.http.timeout,
        )?;
        let jokes = JokeClient::new(&config.joke.url, config.http.timeout)?;

        let context = CommandContext {
            application_id: config.discord.application_id.clone(),
            discord: Arc::new(discord),
            jokes: Arc::new(jokes),
        };

        Ok(Self::new(verifier, commands, context))
    }
}

/// Create the webhook router.
///
/// Every POST is signature-checked before routing, including POSTs to
/// unknown paths.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::liveness)
                .post(handlers::interactions)
                .fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            verify_signature,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
